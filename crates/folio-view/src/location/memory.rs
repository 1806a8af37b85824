use url::{ParseError, Url};

use super::UrlState;

const FALLBACK_BASE: &str = "http://localhost/";

/// In-memory address bar
///
/// Used on the host and in tests. Query handling follows the browser's
/// `URLSearchParams`: `set` replaces the first occurrence in place and
/// drops the rest, `delete` removes every occurrence.
#[derive(Clone, Debug)]
pub struct MemoryLocation {
    url: Url,
    replace_count: usize,
}

impl MemoryLocation {
    /// Create a location from an absolute URL or a bare query string
    /// such as `?project=card-7`.
    pub fn new(href: &str) -> Result<Self, ParseError> {
        let url = match Url::parse(href) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => Url::parse(FALLBACK_BASE)?.join(href)?,
            Err(err) => return Err(err),
        };
        Ok(Self {
            url,
            replace_count: 0,
        })
    }

    /// Full URL as shown in the address bar
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Query string including the leading `?`, or empty
    pub fn search(&self) -> String {
        match self.url.query() {
            Some(query) if !query.is_empty() => format!("?{}", query),
            _ => String::new(),
        }
    }

    /// Number of history-replace operations performed
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    fn pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn store_pairs(&mut self, pairs: Vec<(String, String)>) {
        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }
}

impl UrlState for MemoryLocation {
    fn read(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    fn write(&mut self, name: &str, value: Option<&str>) {
        let mut pairs = self.pairs();
        match value {
            Some(value) => {
                let mut replaced = false;
                pairs.retain_mut(|(k, v)| {
                    if k != name {
                        return true;
                    }
                    if replaced {
                        return false;
                    }
                    *v = value.to_string();
                    replaced = true;
                    true
                });
                if !replaced {
                    pairs.push((name.to_string(), value.to_string()));
                }
            }
            None => pairs.retain(|(k, _)| k != name),
        }
        self.store_pairs(pairs);
        self.replace_count += 1;
    }
}
