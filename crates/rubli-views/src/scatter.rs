use rubli_core::entities::VendorListItem;
use serde::Serialize;

/// Vendor position on the contracts-vs-risk scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorPoint {
    pub vendor_id: i64,
    pub name: String,
    /// Number of contracts.
    pub x: f64,
    /// Average risk score.
    pub y: f64,
    /// Total contract value, used for bubble area.
    pub size: f64,
}

/// Scatter points for vendors that have a risk score.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vendor_scatter(vendors: &[VendorListItem]) -> Vec<VendorPoint> {
    vendors
        .iter()
        .filter_map(|vendor| {
            let risk = vendor.avg_risk_score?;
            Some(VendorPoint {
                vendor_id: vendor.id,
                name: vendor.name.clone(),
                x: vendor.total_contracts as f64,
                y: risk,
                size: vendor.total_value_mxn,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: i64, risk: Option<f64>) -> VendorListItem {
        VendorListItem {
            id,
            name: format!("V{id}"),
            rfc: None,
            total_contracts: 12,
            total_value_mxn: 3.5e6,
            avg_risk_score: risk,
            high_risk_pct: None,
            direct_award_pct: None,
            primary_sector_id: None,
        }
    }

    #[test]
    fn unscored_vendors_are_skipped() {
        let points = vendor_scatter(&[vendor(1, Some(0.4)), vendor(2, None)]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].vendor_id, 1);
        assert_eq!(points[0].x, 12.0);
        assert_eq!(points[0].y, 0.4);
        assert_eq!(points[0].size, 3.5e6);
    }
}
