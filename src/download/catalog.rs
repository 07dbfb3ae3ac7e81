//! Whitepapers offered for download

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Whitepaper {
    pub slug: &'static str,
    pub title: &'static str,
    pub version: &'static str,
    pub file_name: &'static str,
    pub summary: &'static str,
}

pub static WHITEPAPERS: &[Whitepaper] = &[
    Whitepaper {
        slug: "protocol",
        title: "Chainsite Protocol",
        version: "2.1",
        file_name: "chainsite-protocol-v2.1.md",
        summary: "Consensus, block production and finality of the Chainsite network.",
    },
    Whitepaper {
        slug: "tokenomics",
        title: "Token Economics",
        version: "1.4",
        file_name: "chainsite-tokenomics-v1.4.md",
        summary: "Supply schedule, staking rewards and fee burning.",
    },
    Whitepaper {
        slug: "bridge",
        title: "Cross-Chain Bridge",
        version: "1.0",
        file_name: "chainsite-bridge-v1.0.md",
        summary: "Light-client verified transfers between Chainsite and external chains.",
    },
    Whitepaper {
        slug: "governance",
        title: "On-Chain Governance",
        version: "1.2",
        file_name: "chainsite-governance-v1.2.md",
        summary: "Proposal lifecycle, voting power and treasury management.",
    },
];

pub fn find(slug: &str) -> Option<&'static Whitepaper> {
    WHITEPAPERS.iter().find(|paper| paper.slug == slug)
}

/// Case-insensitive match on slug, title and summary. An empty or blank
/// query matches everything.
pub fn search(query: &str) -> Vec<&'static Whitepaper> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return WHITEPAPERS.iter().collect();
    }
    WHITEPAPERS
        .iter()
        .filter(|paper| {
            paper.slug.contains(&needle)
                || paper.title.to_lowercase().contains(&needle)
                || paper.summary.to_lowercase().contains(&needle)
        })
        .collect()
}

impl Whitepaper {
    /// Document body written when the paper is saved
    pub fn render(&self) -> String {
        format!(
            "# {} (v{})\n\n{}\n",
            self.title, self.version, self.summary
        )
    }
}
