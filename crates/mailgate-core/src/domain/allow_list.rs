//! The set of domains accepted as valid email hosts.

use std::collections::HashSet;

use crate::domain::error::DomainError;

/// Domains allowed when nothing else is configured.
pub const DEFAULT_DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
];

/// Mutable allow-list of lowercase, non-empty domain names.
///
/// Every entry point normalizes its argument (trim + lowercase), so lookups
/// and mutations agree on case no matter how the caller typed the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    domains: HashSet<String>,
}

impl AllowList {
    /// An empty allow-list. Every domain is rejected until one is added.
    pub fn empty() -> Self {
        Self {
            domains: HashSet::new(),
        }
    }

    /// Build from arbitrary domain strings, normalizing each entry.
    pub fn from_domains<I, S>(domains: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::empty();
        for domain in domains {
            list.insert(domain.as_ref())?;
        }
        Ok(list)
    }

    /// Insert `domain`. Returns `false` when it was already present.
    pub fn insert(&mut self, domain: &str) -> Result<bool, DomainError> {
        let domain = normalize(domain).ok_or(DomainError::EmptyDomain)?;
        Ok(self.domains.insert(domain))
    }

    /// Remove `domain` if present. Returns whether anything was removed.
    pub fn remove(&mut self, domain: &str) -> bool {
        match normalize(domain) {
            Some(domain) => self.domains.remove(&domain),
            None => false,
        }
    }

    pub fn contains(&self, domain: &str) -> bool {
        normalize(domain).is_some_and(|d| self.domains.contains(&d))
    }

    /// Exact lookup for an already-normalized domain.
    pub(crate) fn contains_normalized(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// Owned copy of the current entries.
    pub fn snapshot(&self) -> HashSet<String> {
        self.domains.clone()
    }

    /// Entries in alphabetical order.
    pub fn sorted(&self) -> Vec<String> {
        let mut domains: Vec<String> = self.domains.iter().cloned().collect();
        domains.sort();
        domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            domains: DEFAULT_DOMAINS.iter().map(|d| (*d).to_owned()).collect(),
        }
    }
}

fn normalize(domain: &str) -> Option<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_lowercase())
    }
}
