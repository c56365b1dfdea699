//! Synthetic analysis: fixed text templated on the file name plus a random
//! risk level.

use rand::Rng;

use super::aggregate::{AnalysisDetails, AnalysisResult, RiskLevel};

const KEY_POINTS: &[&str] = &[
    "Contract duration: 12 months with auto-renewal clause",
    "Payment terms: Net 30 days from invoice date",
    "Termination: 30 days written notice required",
    "Liability cap: $50,000 or contract value, whichever is lower",
    "Governing law: State of California",
];

const RECOMMENDATIONS: &[&str] = &[
    "Review the termination clause for favorable terms",
    "Consider negotiating the liability cap amount",
    "Verify the governing law aligns with your business location",
    "Ensure all parties have proper signing authority",
    "Add specific performance metrics if applicable",
];

const PARTIES: &[&str] = &[
    "Company A LLC",
    "Service Provider Inc.",
    "John Smith (Individual)",
];

const DATES: &[&str] = &[
    "Contract Start: January 1, 2024",
    "Contract End: December 31, 2024",
    "Review Date: June 30, 2024",
];

const AMOUNTS: &[&str] = &[
    "$10,000 monthly fee",
    "$2,000 setup fee",
    "$50,000 liability cap",
];

const OBLIGATIONS: &[&str] = &[
    "Provider must deliver services within 5 business days",
    "Client must provide necessary access and information",
    "Both parties must maintain confidentiality",
    "Provider must maintain professional insurance",
];

/// Keyword → label, checked in order against the lowercased file name
const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("contract", "Service Agreement"),
    ("lease", "Lease Agreement"),
    ("nda", "Non-Disclosure Agreement"),
];

const FALLBACK_DOCUMENT_TYPE: &str = "Legal Document";

pub fn document_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    DOCUMENT_TYPES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_DOCUMENT_TYPE)
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn synthesize<R: Rng + ?Sized>(file_name: &str, rng: &mut R) -> AnalysisResult {
    let risk_level = RiskLevel::from_rolls(rng.gen::<f64>(), rng.gen::<f64>());

    AnalysisResult {
        summary: format!(
            "This {} appears to be a legal contract with standard terms and conditions. \
             The document outlines the rights and obligations of both parties, including \
             payment terms, performance requirements, and termination clauses.",
            file_name
        ),
        key_points: owned(KEY_POINTS),
        document_type: document_type_for(file_name).to_string(),
        risk_level,
        recommendations: owned(RECOMMENDATIONS),
        details: AnalysisDetails {
            parties: owned(PARTIES),
            dates: owned(DATES),
            amounts: owned(AMOUNTS),
            obligations: owned(OBLIGATIONS),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_document_type_by_keyword() {
        assert_eq!(document_type_for("Consulting_CONTRACT.pdf"), "Service Agreement");
        assert_eq!(document_type_for("office-lease-2024.docx"), "Lease Agreement");
        assert_eq!(document_type_for("mutual_nda.txt"), "Non-Disclosure Agreement");
        assert_eq!(document_type_for("scan.png"), "Legal Document");
    }

    #[test]
    fn test_contract_keyword_wins_over_later_ones() {
        assert_eq!(document_type_for("nda_contract.pdf"), "Service Agreement");
    }

    #[test]
    fn test_summary_mentions_file_name() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = synthesize("lease.pdf", &mut rng);

        assert!(result.summary.starts_with("This lease.pdf appears to be"));
        assert_eq!(result.document_type, "Lease Agreement");
        assert_eq!(result.key_points.len(), 5);
        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(result.details.parties.len(), 3);
        assert_eq!(result.details.obligations.len(), 4);
    }

    #[test]
    fn test_same_seed_same_risk() {
        let a = synthesize("a.pdf", &mut StdRng::seed_from_u64(42));
        let b = synthesize("a.pdf", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_risk_level_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let level = synthesize("x.pdf", &mut rng).risk_level;
            if !seen.contains(&level) {
                seen.push(level);
            }
        }
        assert_eq!(seen.len(), 3);
    }
}
