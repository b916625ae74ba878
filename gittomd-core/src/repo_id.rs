//! Parsing of GitHub repository identifiers.
//!
//! Accepted forms:
//! - `git@github.com:owner/repo.git`
//! - `https://github.com/owner/repo` (extra path segments and `.git` allowed)
//! - `owner/repo`

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static SSH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"git@github\.com:([\w.-]+)/([\w.-]+)\.git").expect("valid regex"));

/// `scheme://[userinfo@]host[:port][/path]`, capturing host and path.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://(?:[^@/?#]*@)?([^/:?#]*)(?::\d*)?([^?#]*)")
        .expect("valid regex")
});

static SHORTHAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w.-]+)/([\w.-]+)$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    /// Returns `None` for anything that is not one of the accepted forms,
    /// including URLs on hosts other than `github.com`.
    pub fn parse(input: &str) -> Option<RepoId> {
        if let Some(caps) = SSH_RE.captures(input) {
            return Some(RepoId {
                owner: caps[1].to_string(),
                repo: caps[2].to_string(),
            });
        }

        if let Some(caps) = URL_RE.captures(input) {
            if !caps[1].eq_ignore_ascii_case("github.com") {
                return None;
            }
            let mut parts = caps[2].split('/').filter(|p| !p.is_empty());
            let (owner, repo) = (parts.next()?, parts.next()?);
            return Some(RepoId {
                owner: owner.to_string(),
                repo: repo.replacen(".git", "", 1),
            });
        }

        SHORTHAND_RE.captures(input).map(|caps| RepoId {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }

    /// HTTPS clone URL on github.com.
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.repo)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
