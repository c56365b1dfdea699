//! Placeholder figures and shortcuts for the dashboard.

#[derive(Debug, Clone, Copy)]
pub struct ActionCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub action: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const ACTION_CARDS: &[ActionCard] = &[
    ActionCard {
        icon: "📄",
        title: "Upload Document",
        text: "Upload legal documents for AI-powered analysis and summarization.",
        action: "Upload Document",
        href: "/upload",
        color: "var(--brand)",
    },
    ActionCard {
        icon: "📊",
        title: "Recent Summaries",
        text: "View and manage your recent document summaries and analyses.",
        action: "View Summaries",
        href: "/upload",
        color: "var(--green)",
    },
    ActionCard {
        icon: "💬",
        title: "Ask AI Lawyer",
        text: "Chat with your AI legal assistant for instant legal guidance.",
        action: "Start Chat",
        href: "/chat",
        color: "var(--purple)",
    },
];

// демо-цифры, не считаются
pub const STATS: &[StatTile] = &[
    StatTile {
        value: "12",
        label: "Documents Analyzed",
        color: "var(--brand)",
    },
    StatTile {
        value: "45min",
        label: "Time Saved",
        color: "var(--green)",
    },
    StatTile {
        value: "8",
        label: "AI Consultations",
        color: "var(--purple)",
    },
    StatTile {
        value: "98%",
        label: "Accuracy Rate",
        color: "var(--orange)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_link_to_protected_screens() {
        assert_eq!(ACTION_CARDS.len(), 3);
        assert!(ACTION_CARDS
            .iter()
            .all(|c| c.href == "/upload" || c.href == "/chat"));
    }

    #[test]
    fn test_stats() {
        let values: Vec<_> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, ["12", "45min", "8", "98%"]);
    }
}
