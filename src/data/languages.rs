use super::LanguageRecord;

pub(super) static LANGUAGES: [LanguageRecord; 12] = [
    LanguageRecord {
        name: "Rust",
        overall_score: 49.40,
        popularity_score: 58.2,
        activity_score: 61.62,
        health_score: 68.0,
        avg_stars: 34618.0,
        avg_forks: 3847.0,
        avg_contributors: 258.0,
        avg_commits: 2891.0,
        enterprise_readiness: 75.0,
        growth_signal: 0.62,
        color: "#CE422B",
        icon: "🦀",
    },
    LanguageRecord {
        name: "TypeScript",
        overall_score: 48.33,
        popularity_score: 51.8,
        activity_score: 69.44,
        health_score: 70.4,
        avg_stars: 68602.0,
        avg_forks: 7234.0,
        avg_contributors: 311.0,
        avg_commits: 3156.0,
        enterprise_readiness: 79.0,
        growth_signal: 0.57,
        color: "#3178C6",
        icon: "📘",
    },
    LanguageRecord {
        name: "Go",
        overall_score: 46.92,
        popularity_score: 54.3,
        activity_score: 58.92,
        health_score: 67.2,
        avg_stars: 43019.0,
        avg_forks: 4523.0,
        avg_contributors: 249.0,
        avg_commits: 2634.0,
        enterprise_readiness: 74.0,
        growth_signal: 0.54,
        color: "#00ADD8",
        icon: "🐹",
    },
    LanguageRecord {
        name: "C++",
        overall_score: 44.12,
        popularity_score: 56.1,
        activity_score: 54.2,
        health_score: 62.5,
        avg_stars: 37214.0,
        avg_forks: 4012.0,
        avg_contributors: 222.0,
        avg_commits: 2401.0,
        enterprise_readiness: 74.0,
        growth_signal: 0.41,
        color: "#00599C",
        icon: "⚙️",
    },
    LanguageRecord {
        name: "Python",
        overall_score: 43.49,
        popularity_score: 72.8,
        activity_score: 52.1,
        health_score: 65.3,
        avg_stars: 78107.0,
        avg_forks: 8234.0,
        avg_contributors: 227.0,
        avg_commits: 2289.0,
        enterprise_readiness: 67.0,
        growth_signal: 0.48,
        color: "#3776AB",
        icon: "🐍",
    },
    LanguageRecord {
        name: "JavaScript",
        overall_score: 43.31,
        popularity_score: 61.4,
        activity_score: 48.6,
        health_score: 63.8,
        avg_stars: 58734.0,
        avg_forks: 6123.0,
        avg_contributors: 241.0,
        avg_commits: 2156.0,
        enterprise_readiness: 75.0,
        growth_signal: 0.45,
        color: "#F7DF1E",
        icon: "📜",
    },
    LanguageRecord {
        name: "Ruby",
        overall_score: 42.40,
        popularity_score: 48.2,
        activity_score: 33.2,
        health_score: 61.4,
        avg_stars: 14640.0,
        avg_forks: 1823.0,
        avg_contributors: 206.0,
        avg_commits: 1845.0,
        enterprise_readiness: 72.0,
        growth_signal: 0.38,
        color: "#CC342D",
        icon: "💎",
    },
    LanguageRecord {
        name: "Java",
        overall_score: 41.45,
        popularity_score: 55.8,
        activity_score: 47.3,
        health_score: 60.2,
        avg_stars: 36080.0,
        avg_forks: 3912.0,
        avg_contributors: 178.0,
        avg_commits: 2034.0,
        enterprise_readiness: 64.0,
        growth_signal: 0.35,
        color: "#007396",
        icon: "☕",
    },
    LanguageRecord {
        name: "Kotlin",
        overall_score: 38.49,
        popularity_score: 46.3,
        activity_score: 36.6,
        health_score: 58.9,
        avg_stars: 14053.0,
        avg_forks: 1534.0,
        avg_contributors: 112.0,
        avg_commits: 1623.0,
        enterprise_readiness: 67.0,
        growth_signal: 0.42,
        color: "#7F52FF",
        icon: "🅺",
    },
    LanguageRecord {
        name: "PHP",
        overall_score: 38.20,
        popularity_score: 49.1,
        activity_score: 34.8,
        health_score: 56.7,
        avg_stars: 15371.0,
        avg_forks: 1712.0,
        avg_contributors: 182.0,
        avg_commits: 1789.0,
        enterprise_readiness: 64.0,
        growth_signal: 0.31,
        color: "#777BB4",
        icon: "🐘",
    },
    LanguageRecord {
        name: "Swift",
        overall_score: 37.43,
        popularity_score: 47.5,
        activity_score: 29.1,
        health_score: 55.8,
        avg_stars: 14861.0,
        avg_forks: 1623.0,
        avg_contributors: 98.0,
        avg_commits: 1534.0,
        enterprise_readiness: 69.0,
        growth_signal: 0.36,
        color: "#FA7343",
        icon: "🦅",
    },
    LanguageRecord {
        name: "C#",
        overall_score: 36.78,
        popularity_score: 50.2,
        activity_score: 42.5,
        health_score: 59.1,
        avg_stars: 18380.0,
        avg_forks: 2012.0,
        avg_contributors: 149.0,
        avg_commits: 1923.0,
        enterprise_readiness: 67.0,
        growth_signal: 0.33,
        color: "#239120",
        icon: "#️⃣",
    },
];
