//! Baked-in demo content, shown until real manifests are published.

use ironarch_core::Visibility;

use crate::{
    dashboard::{
        Certification, CurriculumPanel, Dashboard, MetricValue, Metrics, PaperSummary, RecentLab,
        ResearchItem, Semester, TimelineItem,
    },
    item::{Difficulty, Lab, Paper, PaperKind, PaperStatus},
};

fn paper(
    code: &str,
    title: &str,
    kind: PaperKind,
    status: PaperStatus,
    visibility: Visibility,
) -> Paper {
    Paper {
        code: code.to_string(),
        title: title.to_string(),
        track: code.split('-').next().unwrap_or_default().to_string(),
        kind,
        semester: 1,
        status,
        visibility,
    }
}

/// Demo curriculum.
pub fn papers() -> Vec<Paper> {
    use PaperKind::{Practical, Theory};
    use PaperStatus::{InProgress, Mastered, NotStarted};
    use Visibility::{Private, Public};

    vec![
        paper("CSC-1-1", "Computer Architecture & Systems Engineering", Theory, Mastered, Public),
        paper("CSC-1-2", "Low-Level Logic & Problem Solving", Theory, InProgress, Public),
        paper("CSC-1-3", "Linux Fundamentals", Practical, NotStarted, Public),
        paper("AAI-1-1", "Mathematical Foundations of Intelligence", Theory, InProgress, Public),
        paper("AAI-1-2", "Intro to Machine Learning", Theory, NotStarted, Public),
        paper("AAI-1-3", "AI Security Basics", Practical, NotStarted, Private),
    ]
}

fn lab(
    code: &str,
    title: &str,
    difficulty: Difficulty,
    description: &str,
    tags: &[&str],
    visibility: Visibility,
) -> Lab {
    Lab {
        code: code.to_string(),
        title: title.to_string(),
        difficulty,
        track: code.split('-').next().unwrap_or_default().to_string(),
        semester: 1,
        description: description.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        visibility,
    }
}

/// Demo lab archive.
pub fn labs() -> Vec<Lab> {
    vec![
        lab(
            "CSC-1-1-PR",
            "Buffer Overflow Exploit",
            Difficulty::Advanced,
            "Stack-based buffer overflow on a vulnerable x86-64 binary. Develop shellcode and \
             bypass basic stack protections.",
            &["exploit", "memory", "gdb", "pwntools"],
            Visibility::Private,
        ),
        lab(
            "CSC-1-2-PR",
            "Network Sniffing Tool",
            Difficulty::Intermediate,
            "Passive network traffic capture and protocol analysis using raw sockets and libpcap \
             on Hornet (Debian CLI).",
            &["networking", "pcap", "python", "scapy"],
            Visibility::Public,
        ),
        lab(
            "AAI-1-1-PR",
            "Basic Neural Network",
            Difficulty::Beginner,
            "Implement a feedforward neural network from scratch in Python (NumPy only). Train on \
             MNIST digit dataset.",
            &["ml", "numpy", "classification", "python"],
            Visibility::Public,
        ),
        lab(
            "CSC-1-3-PR",
            "Linux Privilege Escalation",
            Difficulty::Advanced,
            "Enumerate and exploit common Linux privilege escalation vectors: SUID bits, cron \
             jobs, writable /etc/passwd.",
            &["privesc", "linux", "bash", "enumeration"],
            Visibility::Private,
        ),
    ]
}

fn summaries(items: &[(&str, &str, PaperStatus)]) -> Vec<PaperSummary> {
    items
        .iter()
        .map(|(code, title, status)| PaperSummary {
            code: (*code).to_string(),
            title: (*title).to_string(),
            status: *status,
        })
        .collect()
}

/// Demo dashboard.
pub fn dashboard() -> Dashboard {
    use PaperStatus::{InProgress, Mastered, NotStarted};

    Dashboard {
        metrics: Metrics {
            labs: MetricValue::Count(12),
            papers: MetricValue::Count(7),
            tools: MetricValue::Count(3),
            certs: MetricValue::Text("2 (Sec+, OSCP)".to_string()),
        },
        csc_sec: CurriculumPanel {
            progress: 28,
            papers: summaries(&[
                ("CSC-1-1", "Computer Architecture", Mastered),
                ("CSC-1-2", "Low-Level Logic", InProgress),
                ("CSC-1-3", "Linux Fundamentals", NotStarted),
            ]),
        },
        cs_core: Some(CurriculumPanel {
            progress: 35,
            papers: summaries(&[
                ("CSC-1-1", "Algorithms & Structures", Mastered),
                ("CSC-1-2", "Systems Programming", InProgress),
                ("CSC-1-3", "C & Assembly", NotStarted),
            ]),
        }),
        aai: CurriculumPanel {
            progress: 20,
            papers: summaries(&[
                ("AAI-1-1", "Math Foundations", InProgress),
                ("AAI-1-2", "Intro to Machine Learning", NotStarted),
                ("AAI-1-3", "AI Security Basics", NotStarted),
            ]),
        },
        semester: Semester {
            current: 1,
            name: "THE BRIDGE".to_string(),
            timeline: vec![
                TimelineItem {
                    code: "CSC-1-1".to_string(),
                    title: "Computer Architecture & Systems Engineering".to_string(),
                    current: false,
                },
                TimelineItem {
                    code: "CSC-1-2".to_string(),
                    title: "Low-Level Logic & Problem Solving".to_string(),
                    current: false,
                },
                TimelineItem {
                    code: "AAI-1-1".to_string(),
                    title: "Mathematical Foundations of Intelligence".to_string(),
                    current: true,
                },
            ],
        },
        recent_labs: ["Buffer Overflow Exploit", "Network Sniffing Tool", "Basic Neural Network"]
            .into_iter()
            .map(|title| RecentLab { title: title.to_string() })
            .collect(),
        recent_research: vec![
            ResearchItem {
                title: "Reverse Engineering Linux Binaries".to_string(),
                version: "v1.2".to_string(),
            },
            ResearchItem {
                title: "Securing AI Model Pipelines".to_string(),
                version: "v1.0".to_string(),
            },
            ResearchItem {
                title: "Threat Analysis of IoT Devices".to_string(),
                version: String::new(),
            },
        ],
        certifications: vec![
            Certification { name: "Security+".to_string(), done: true },
            Certification { name: "OSCP".to_string(), done: true },
            Certification { name: "CISSP".to_string(), done: false },
        ],
    }
}
