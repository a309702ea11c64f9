//! Table columns for the record types the commands print.

use rubli_core::entities::{
    CategoryStat, ContractListItem, Dossier, DossierItem, InstitutionListItem, InstitutionVendor,
    InvestigationCase, NetworkLink, NetworkNode, PriceHypothesis, RiskBucket, Sector,
    VendorListItem, WatchlistItem,
};
use rubli_core::format::{format_compact_mxn, format_optional_risk, format_risk_percent};
use rubli_core::responses::{RiskDistributionItem, YearStat};
use rubli_views::{CategorySectorRollup, FlowBar, SectorFlowTotal, VendorPoint};

/// A record that renders as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}

/// A percentage the API already reports on a 0-100 scale.
#[must_use]
pub fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), |v| format!("{v:.1}%"))
}

const fn flag(value: bool) -> &'static str {
    if value { "yes" } else { "" }
}

impl TableRow for ContractListItem {
    const HEADERS: &'static [&'static str] = &[
        "id", "date", "vendor", "institution", "amount", "risk", "level", "flags",
    ];

    fn cells(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if self.is_direct_award {
            flags.push("DA");
        }
        if self.is_single_bid {
            flags.push("SB");
        }
        vec![
            self.id.to_string(),
            opt(self.contract_date),
            opt(self.vendor_name.as_deref()),
            opt(self.institution_name.as_deref()),
            format_compact_mxn(self.amount_mxn),
            format_optional_risk(self.risk_score),
            opt(self.risk_level),
            flags.join(","),
        ]
    }
}

impl TableRow for VendorListItem {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "rfc", "contracts", "value", "risk", "high risk", "direct"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.rfc.as_deref()),
            self.total_contracts.to_string(),
            format_compact_mxn(self.total_value_mxn),
            format_optional_risk(self.avg_risk_score),
            percent(self.high_risk_pct),
            percent(self.direct_award_pct),
        ]
    }
}

impl TableRow for InstitutionListItem {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "siglas", "type", "contracts", "value", "risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.siglas.as_deref()),
            opt(self.institution_type.as_deref()),
            self.total_contracts.to_string(),
            format_compact_mxn(self.total_amount_mxn),
            format_optional_risk(self.avg_risk_score),
        ]
    }
}

impl TableRow for InstitutionVendor {
    const HEADERS: &'static [&'static str] = &["vendor", "name", "contracts", "value", "risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.vendor_id.to_string(),
            self.vendor_name.clone(),
            self.contract_count.to_string(),
            format_compact_mxn(self.total_value_mxn),
            format_optional_risk(self.avg_risk_score),
        ]
    }
}

impl TableRow for Sector {
    const HEADERS: &'static [&'static str] =
        &["id", "code", "name", "contracts", "value", "risk", "high risk", "direct"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.code.clone(),
            self.name.clone(),
            self.total_contracts.to_string(),
            format_compact_mxn(self.total_value_mxn),
            format_optional_risk(self.avg_risk_score),
            self.high_risk_count.to_string(),
            percent(self.direct_award_pct),
        ]
    }
}

impl TableRow for YearStat {
    const HEADERS: &'static [&'static str] =
        &["year", "contracts", "value", "risk", "direct", "single bid", "high risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            self.contracts.to_string(),
            format_compact_mxn(self.total_value),
            format_optional_risk(self.avg_risk),
            percent(self.direct_award_pct),
            percent(self.single_bid_pct),
            percent(self.high_risk_pct),
        ]
    }
}

impl TableRow for RiskDistributionItem {
    const HEADERS: &'static [&'static str] = &["level", "contracts", "share", "value"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.risk_level.to_string(),
            self.count.to_string(),
            format!("{:.1}%", self.percentage),
            format_compact_mxn(self.total_value_mxn),
        ]
    }
}

impl TableRow for RiskBucket {
    const HEADERS: &'static [&'static str] = &["level", "contracts", "value"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.risk_level.to_string(),
            self.count.to_string(),
            format_compact_mxn(self.value_mxn),
        ]
    }
}

impl TableRow for CategoryStat {
    const HEADERS: &'static [&'static str] =
        &["id", "category", "sector", "contracts", "value", "risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.category_id.to_string(),
            self.name.clone(),
            opt(self.sector_code.as_deref()),
            self.total_contracts.to_string(),
            format_compact_mxn(self.total_value),
            format_risk_percent(self.avg_risk),
        ]
    }
}

impl TableRow for CategorySectorRollup {
    const HEADERS: &'static [&'static str] =
        &["sector", "categories", "contracts", "value", "risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.sector_code.clone(),
            self.category_count.to_string(),
            self.total_contracts.to_string(),
            format_compact_mxn(self.total_value),
            format_risk_percent(self.avg_risk),
        ]
    }
}

impl TableRow for FlowBar {
    const HEADERS: &'static [&'static str] = &["id", "name", "value", "contracts", "risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.label.clone(),
            format_compact_mxn(self.value),
            self.contract_count.to_string(),
            format_optional_risk(self.avg_risk),
        ]
    }
}

impl TableRow for SectorFlowTotal {
    const HEADERS: &'static [&'static str] = &["sector", "name", "value", "contracts"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.sector_id.to_string(),
            self.name.clone(),
            format_compact_mxn(self.value),
            self.contract_count.to_string(),
        ]
    }
}

impl TableRow for VendorPoint {
    const HEADERS: &'static [&'static str] = &["vendor", "name", "contracts", "risk", "value"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.vendor_id.to_string(),
            self.name.clone(),
            format!("{}", self.x),
            format_risk_percent(self.y),
            format_compact_mxn(self.size),
        ]
    }
}

impl TableRow for NetworkNode {
    const HEADERS: &'static [&'static str] = &["id", "type", "name", "value", "contracts", "risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.node_type.to_string(),
            self.name.clone(),
            format_compact_mxn(self.value),
            self.contracts.to_string(),
            format_optional_risk(self.risk_score),
        ]
    }
}

impl TableRow for NetworkLink {
    const HEADERS: &'static [&'static str] = &["source", "target", "value", "contracts", "risk"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.source.clone(),
            self.target.clone(),
            format_compact_mxn(self.value),
            self.contracts.to_string(),
            format_optional_risk(self.avg_risk),
        ]
    }
}

impl TableRow for PriceHypothesis {
    const HEADERS: &'static [&'static str] = &[
        "id", "contract", "type", "confidence", "level", "amount", "review",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.hypothesis_id.clone(),
            self.contract_id.to_string(),
            self.hypothesis_type.clone(),
            format_risk_percent(self.confidence),
            self.confidence_level.to_string(),
            self.amount_mxn.map_or_else(|| String::from("-"), format_compact_mxn),
            self.review_status().to_string(),
        ]
    }
}

impl TableRow for InvestigationCase {
    const HEADERS: &'static [&'static str] = &[
        "id", "case", "title", "type", "score", "est. loss", "vendors", "status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.case_id.clone(),
            self.title.clone(),
            self.case_type.clone(),
            format_risk_percent(self.suspicion_score),
            self.estimated_loss_mxn
                .map_or_else(|| String::from("-"), format_compact_mxn),
            self.vendor_count.to_string(),
            self.validation_status.to_string(),
        ]
    }
}

impl TableRow for WatchlistItem {
    const HEADERS: &'static [&'static str] = &[
        "id", "type", "item", "name", "priority", "status", "risk", "alert", "flag",
    ];

    fn cells(&self) -> Vec<String> {
        let over_threshold = matches!(
            (self.current_risk_score, self.alert_threshold),
            (Some(risk), Some(threshold)) if risk >= threshold
        );
        vec![
            self.id.to_string(),
            self.item_type.to_string(),
            self.item_id.to_string(),
            self.item_name.clone(),
            self.priority.to_string(),
            self.status.to_string(),
            format_optional_risk(self.current_risk_score),
            format_optional_risk(self.alert_threshold),
            String::from(flag(over_threshold)),
        ]
    }
}

impl TableRow for Dossier {
    const HEADERS: &'static [&'static str] = &["id", "name", "status", "items", "updated"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.status.to_string(),
            self.item_count.to_string(),
            self.updated_at.format("%Y-%m-%d").to_string(),
        ]
    }
}

impl TableRow for DossierItem {
    const HEADERS: &'static [&'static str] = &["id", "type", "item", "name", "annotation"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.item_type.to_string(),
            self.item_id.to_string(),
            self.item_name.clone(),
            opt(self.annotation.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rubli_core::enums::{EntityType, WatchlistPriority, WatchlistStatus};

    use super::*;

    fn contract() -> ContractListItem {
        ContractListItem {
            id: 42,
            contract_number: None,
            title: None,
            amount_mxn: 1_540_000_000.0,
            contract_date: None,
            contract_year: Some(2023),
            sector_id: Some(1),
            sector_name: None,
            risk_score: Some(0.345),
            risk_level: None,
            is_direct_award: true,
            is_single_bid: true,
            vendor_name: Some("Grupo Fármacos".to_string()),
            vendor_id: Some(7),
            institution_id: None,
            institution_name: None,
        }
    }

    #[test]
    fn contract_row_formats_amount_risk_and_flags() {
        let cells = contract().cells();
        assert_eq!(cells.len(), ContractListItem::HEADERS.len());
        assert_eq!(
            cells,
            vec!["42", "-", "Grupo Fármacos", "-", "$1.5B", "34.5%", "-", "DA,SB"]
        );
    }

    #[test]
    fn watchlist_row_flags_items_over_threshold() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut item = WatchlistItem {
            id: 1,
            item_type: EntityType::Vendor,
            item_id: 7,
            item_name: "Grupo Fármacos".to_string(),
            reason: "price spike".to_string(),
            priority: WatchlistPriority::High,
            status: WatchlistStatus::Watching,
            notes: None,
            alert_threshold: Some(0.5),
            current_risk_score: Some(0.61),
            created_at: at,
            updated_at: at,
        };
        assert_eq!(item.cells().last().map(String::as_str), Some("yes"));

        item.current_risk_score = Some(0.2);
        assert_eq!(item.cells().last().map(String::as_str), Some(""));
    }

    #[test]
    fn header_counts_match_cells() {
        let bar = FlowBar {
            id: 3,
            label: "IMSS".to_string(),
            name: "IMSS".to_string(),
            value: 12_500.0,
            contract_count: 2,
            avg_risk: None,
        };
        assert_eq!(bar.cells().len(), FlowBar::HEADERS.len());
        assert_eq!(bar.cells()[2], "$12,500");
        assert_eq!(bar.cells()[4], "-");
    }
}
