//! Cookie key/value primitive.
//!
//! A [`Jar`] exposes cookies the way a browser does: one flat
//! `a=1; b=2` string to read, and one assignment at a time to write.
//! [`Cookies`] builds named get/set/delete on top of that.

#[cfg(target_arch = "wasm32")]
pub use document::DocumentJar;
pub use file::FileJar;
pub use memory::Entry;
pub use memory::MemoryJar;

pub mod expiry;
pub mod file;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod document;

use crate::Days;
use crate::store::Store;
use chrono::Utc;

/// Raw cookie storage, shaped like `document.cookie`.
pub trait Jar {
    /// All live cookies as `name=value` pairs joined by `"; "`.
    fn cookie(&self) -> String;
    /// Apply one `name=value; attr=...` assignment. Failures are silent.
    fn set_cookie(&mut self, assignment: &str);
}

/// Named cookie access over any [`Jar`].
#[derive(Debug, Default, Clone)]
pub struct Cookies<J: Jar> {
    jar: J,
}

impl<J: Jar> Cookies<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }
    pub fn jar(&self) -> &J {
        &self.jar
    }
    pub fn jar_mut(&mut self) -> &mut J {
        &mut self.jar
    }
    pub fn into_inner(self) -> J {
        self.jar
    }

    /// Write `name=value` visible on every path, expiring `days` days from now.
    /// An existing cookie with the same name is overwritten.
    pub fn set(&mut self, name: &str, value: &str, days: Days) {
        let expires = expiry::after(Utc::now(), days);
        self.jar.set_cookie(&format!(
            "{}={};expires={};path={}",
            name,
            value,
            expiry::format(expires),
            crate::COOKIE_PATH
        ));
    }

    /// [`Cookies::set`] with the default lifetime.
    pub fn set_for(&mut self, name: &str, value: &str) {
        self.set(name, value, crate::DEFAULT_TTL_DAYS)
    }

    /// Value of the first cookie named exactly `name`. Leading spaces of each
    /// `;`-separated segment are ignored; the name match is case-sensitive.
    pub fn get(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);
        self.jar
            .cookie()
            .split(';')
            .map(|segment| segment.trim_start_matches(' '))
            .find(|segment| segment.starts_with(&prefix))
            .map(|segment| segment[prefix.len()..].to_owned())
    }

    /// Evict `name` by writing it with an expiry in the past.
    pub fn delete(&mut self, name: &str) {
        self.jar.set_cookie(&format!(
            "{}=; expires={}; path={};",
            name,
            expiry::EPOCH,
            crate::COOKIE_PATH
        ));
    }
}

impl<J: Jar> Store for Cookies<J> {
    fn get(&self, key: &str) -> Option<String> {
        Cookies::get(self, key)
    }
    fn set(&mut self, key: &str, value: &str, ttl: Days) {
        Cookies::set(self, key, value, ttl)
    }
    fn delete(&mut self, key: &str) {
        Cookies::delete(self, key)
    }
}
