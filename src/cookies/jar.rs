use crate::base::config::JarConfig;
use crate::base::jarerror::JarError;
use crate::cookies::canonical_cookie::{CanonicalCookie, JarRecord};
use crate::cookies::matcher::{self, CookiePattern, MatchMode};
use crate::cookies::{netscape, persistence};

/// Result of [`CookieJar::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// Appended as a new record at this index.
    Inserted(usize),
    /// Overwrote the record at this index.
    Replaced(usize),
}

/// The contents of one cookie file, in file order.
///
/// Records borrow from the loaded file buffer and from any `Set-Cookie`
/// headers applied to the jar. Evicted records keep their slot until the jar
/// is written out.
#[derive(Debug, Clone, Default)]
pub struct CookieJar<'a> {
    records: Vec<JarRecord<'a>>,
    config: JarConfig,
}

impl<'a> CookieJar<'a> {
    pub fn new(config: JarConfig) -> Self {
        Self {
            records: Vec::new(),
            config,
        }
    }

    /// Load a jar from cookie file contents.
    pub fn parse(buf: &'a [u8], config: JarConfig) -> Result<Self, JarError> {
        let records = netscape::parse_jar(buf, &config)?;
        tracing::debug!(records = records.len(), "parsed cookie jar");
        Ok(Self { records, config })
    }

    /// All records, comments and evicted slots included.
    pub fn records(&self) -> &[JarRecord<'a>] {
        &self.records
    }

    /// Active cookies in file order.
    pub fn cookies(&self) -> impl Iterator<Item = &CanonicalCookie<'a>> + '_ {
        self.records.iter().filter_map(|r| r.active_cookie())
    }

    /// Number of active cookies.
    pub fn cookie_count(&self) -> usize {
        self.cookies().count()
    }

    /// See [`matcher::find`].
    pub fn find(
        &self,
        from: usize,
        mode: MatchMode,
        pattern: &CookiePattern<'_>,
    ) -> Option<usize> {
        matcher::find(&self.records, from, mode, pattern)
    }

    /// Store `cookie`, replacing the active cookie with the same name,
    /// domain and path if there is one.
    pub fn upsert(&mut self, cookie: CanonicalCookie<'a>) -> Result<Upsert, JarError> {
        let key = CookiePattern::key_of(&cookie);

        if let Some(idx) = self.find(0, MatchMode::Exact, &key) {
            tracing::debug!(
                name = %cookie.name,
                domain = %cookie.domain,
                path = %cookie.path,
                idx,
                "replacing cookie"
            );
            self.records[idx] = JarRecord::cookie(cookie);
            return Ok(Upsert::Replaced(idx));
        }

        if self.records.len() >= self.config.max_records {
            return Err(JarError::CapacityExceeded {
                max: self.config.max_records,
            });
        }

        tracing::debug!(
            name = %cookie.name,
            domain = %cookie.domain,
            path = %cookie.path,
            "adding cookie"
        );
        self.records.push(JarRecord::cookie(cookie));
        Ok(Upsert::Inserted(self.records.len() - 1))
    }

    /// Mark every active cookie matching `pattern` (wildcards allowed) as
    /// evicted. Returns how many were marked.
    pub fn evict_all(&mut self, pattern: &CookiePattern<'_>) -> usize {
        let mut evicted = 0;
        let mut from = 0;

        while let Some(idx) = self.find(from, MatchMode::Wildcard, pattern) {
            self.records[idx].evicted = true;
            evicted += 1;
            from = idx + 1;
        }

        tracing::debug!(
            name = %pattern.name,
            domain = %pattern.domain,
            path = %pattern.path,
            evicted,
            "evicted cookies"
        );
        evicted
    }

    /// Serialize to the Netscape cookie file format.
    pub fn to_netscape(&self) -> Vec<u8> {
        netscape::write_jar(&self.records)
    }

    /// Export active cookies as a `null`-terminated JSON array.
    pub fn to_json(&self) -> Result<String, JarError> {
        persistence::write_json(&self.records)
    }
}
