use mrv_core::{ComplianceRecord, GhgMetrics};

/// Classifies a stored attained/required compliance-unit pair. No formula is
/// applied here, the assessment producing the pair is external.
pub fn evaluate_compliance(record: &ComplianceRecord) -> GhgMetrics {
    let net = record.required - record.attained;
    GhgMetrics {
        attained: record.attained,
        required: record.required,
        excess: net.max(0.0),
        missing: net.min(0.0),
        net_compliance_units: net,
        has_penalty: record.attained > record.required,
    }
}
