// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Browser-like request headers

use rand::seq::SliceRandom;

const ACCEPT: &str = "*/*";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const ORIGIN: &str = "https://debank.com";
const REFERER: &str = "https://debank.com/";
const SOURCE: &str = "web";

/// Desktop Chrome user agents rotated across requests
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36 Edg/125.0.0.0",
];

/// Header set for one request, with a freshly drawn user agent
pub fn browser_headers() -> Vec<(&'static str, String)> {
    let user_agent = USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0]);

    vec![
        ("accept", ACCEPT.to_string()),
        ("accept-language", ACCEPT_LANGUAGE.to_string()),
        ("origin", ORIGIN.to_string()),
        ("referer", REFERER.to_string()),
        ("source", SOURCE.to_string()),
        ("user-agent", user_agent.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_header_set_present() {
        let headers = browser_headers();
        let names: Vec<_> = headers.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "accept",
                "accept-language",
                "origin",
                "referer",
                "source",
                "user-agent"
            ]
        );
    }

    #[test]
    fn user_agent_from_pool() {
        for _ in 0..20 {
            let headers = browser_headers();
            let (_, user_agent) = headers
                .iter()
                .find(|(name, _)| *name == "user-agent")
                .unwrap();
            assert!(USER_AGENTS.contains(&user_agent.as_str()));
        }
    }
}
