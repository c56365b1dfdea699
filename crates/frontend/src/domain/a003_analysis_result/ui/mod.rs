mod analysis_card;

pub use analysis_card::{risk_badge_color, AnalysisCard};
