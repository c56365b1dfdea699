//! Static copy for the marketing page.

#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    /// css modifier: tone-blue, tone-green, ...
    pub tone: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub avatar: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub tone: &'static str,
}

pub const NAV_ANCHORS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#benefits", "Benefits"),
    ("#testimonials", "Reviews"),
    ("#contact", "Contact"),
];

pub const HERO_CHECKS: &[&str] = &["5-second summaries", "75% time saved", "90% cost reduction"];

pub const FEATURES: &[Tile] = &[
    Tile {
        icon: "🚀",
        title: "Lightning Fast",
        text: "Summarize any legal document in just 5 seconds. No more hours of reading through complex legal jargon.",
        tone: "tone-blue",
    },
    Tile {
        icon: "📄",
        title: "AI Document Handling",
        text: "The fastest way to summarize agreements, convert images to text, translate documents, and more.",
        tone: "tone-green",
    },
    Tile {
        icon: "💬",
        title: "Ask AI Lawyer",
        text: "Legal research never been easier. Have a conversation with your virtual assistant in real-time.",
        tone: "tone-purple",
    },
    Tile {
        icon: "🌐",
        title: "Internet-Powered",
        text: "Rapid web research, completing hours of analysis in seconds with up-to-date legal information.",
        tone: "tone-orange",
    },
    Tile {
        icon: "📱",
        title: "Multi-Platform",
        text: "Access our platform with a simple tap – on the web, iOS, or Android. Work anywhere, anytime.",
        tone: "tone-red",
    },
    Tile {
        icon: "⚙️",
        title: "Personalized for You",
        text: "Customize and educate it to match your unique preferences and legal specialization.",
        tone: "tone-indigo",
    },
];

pub const BENEFITS: &[Tile] = &[
    Tile {
        icon: "🔒",
        title: "Private",
        text: "We stand firm on privacy, ensuring that users' conversations remain secure and anonymous.",
        tone: "",
    },
    Tile {
        icon: "⚡",
        title: "Fast",
        text: "The fastest online lawyer service, ideal for avoiding expenses and appointments.",
        tone: "",
    },
    Tile {
        icon: "75%",
        title: "Time Saved",
        text: "On routine tasks. Focus on what matters most while AI handles the heavy lifting.",
        tone: "",
    },
    Tile {
        icon: "90%",
        title: "Cost Reduction",
        text: "In legal services. Get professional-grade analysis at a fraction of traditional costs.",
        tone: "",
    },
];

pub const AUDIENCES: &[Tile] = &[
    Tile {
        icon: "👨‍💼",
        title: "For Lawyers",
        text: "Streamline research, draft documents faster, and analyze contracts with AI precision.",
        tone: "tone-blue",
    },
    Tile {
        icon: "🏢",
        title: "For Law Firms",
        text: "Scale your operations, reduce costs, and deliver faster results to your clients.",
        tone: "tone-green",
    },
    Tile {
        icon: "🎓",
        title: "For Law Students",
        text: "Accelerate your learning with AI-powered case analysis and legal research assistance.",
        tone: "tone-purple",
    },
    Tile {
        icon: "👥",
        title: "For Consumers",
        text: "Understand complex legal terms and documents without expensive consultations.",
        tone: "tone-orange",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        avatar: "👩‍💼",
        name: "Sarah Mitchell",
        role: "Freelancer",
        quote: "Navigating through legal jargon was a maze until Legal AI came to the rescue. Now, I understand complex terms in simple language, making my life a lot easier.",
        tone: "tone-blue",
    },
    Testimonial {
        avatar: "👨‍⚖️",
        name: "Timothy Clark",
        role: "Attorney",
        quote: "It's like having a personal assistant on standby. The AI-driven assistance in composing documents and analyzing contracts has freed up so much of my time.",
        tone: "tone-green",
    },
    Testimonial {
        avatar: "🎓",
        name: "Rebecca Adams",
        role: "Law Student",
        quote: "Legal AI has been a beacon, assisting me with research writing and case briefs, making my academic journey less daunting.",
        tone: "tone-purple",
    },
];

pub const CTA_CHECKS: &[&str] = &["Money back guarantee", "Free trial", "Cancel anytime"];
