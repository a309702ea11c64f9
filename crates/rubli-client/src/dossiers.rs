//! Dossier endpoints.

use reqwest::Method;
use rubli_core::entities::{Dossier, DossierCreate, DossierItem, DossierItemCreate, DossierUpdate};
use rubli_core::enums::DossierStatus;
use rubli_core::responses::{DeleteResponse, ListResponse};

use crate::{ApiClient, ClientError, QueryParams};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_dossiers(
        &self,
        status: Option<DossierStatus>,
    ) -> Result<ListResponse<Dossier>, ClientError> {
        let query = QueryParams::new().with("status", status);
        self.get_json("/dossiers", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_dossier(&self, id: i64) -> Result<Dossier, ClientError> {
        self.get_json(&format!("/dossiers/{id}"), &QueryParams::new())
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn create_dossier(&self, dossier: &DossierCreate) -> Result<Dossier, ClientError> {
        self.send_json(Method::POST, "/dossiers", Some(dossier)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn update_dossier(
        &self,
        id: i64,
        update: &DossierUpdate,
    ) -> Result<Dossier, ClientError> {
        self.send_json(Method::PATCH, &format!("/dossiers/{id}"), Some(update))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn delete_dossier(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        self.send_json::<(), _>(Method::DELETE, &format!("/dossiers/{id}"), None)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn dossier_items(&self, id: i64) -> Result<ListResponse<DossierItem>, ClientError> {
        self.get_json(&format!("/dossiers/{id}/items"), &QueryParams::new())
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn add_dossier_item(
        &self,
        dossier_id: i64,
        item: &DossierItemCreate,
    ) -> Result<DossierItem, ClientError> {
        self.send_json(
            Method::POST,
            &format!("/dossiers/{dossier_id}/items"),
            Some(item),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn remove_dossier_item(
        &self,
        dossier_id: i64,
        item_id: i64,
    ) -> Result<DeleteResponse, ClientError> {
        self.send_json::<(), _>(
            Method::DELETE,
            &format!("/dossiers/{dossier_id}/items/{item_id}"),
            None,
        )
        .await
    }
}
