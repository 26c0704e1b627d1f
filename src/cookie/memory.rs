use super::Jar;
use super::expiry;
use chrono::DateTime;
use chrono::TimeDelta;
use chrono::Utc;

/// One live cookie. `expires` of `None` is a session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: String,
    pub expires: Option<DateTime<Utc>>,
}

impl Entry {
    fn live(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_none_or(|at| at > now)
    }
}

/// Full `name=value; expires=...; path=/` line, the inverse of
/// [`Entry::try_from`].
impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(at) = self.expires {
            write!(f, "; expires={}", expiry::format(at))?;
        }
        write!(f, "; path={}", crate::COOKIE_PATH)
    }
}

/// Parse a `document.cookie` style assignment. Only `expires` and `max-age`
/// are honored; `max-age` wins when both are present. A pair with no `=` is
/// not a cookie.
impl TryFrom<&str> for Entry {
    type Error = String;
    fn try_from(assignment: &str) -> Result<Self, Self::Error> {
        let mut segments = assignment.split(';');
        let pair = segments.next().unwrap_or_default();
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("invalid cookie assignment: {}", assignment))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("invalid cookie name: {}", assignment));
        }
        let mut expires = None;
        let mut max_age = None;
        for attribute in segments {
            let (key, val) = attribute.split_once('=').unwrap_or((attribute, ""));
            match key.trim().to_ascii_lowercase().as_str() {
                "expires" => expires = expiry::parse(val).or(expires),
                "max-age" => max_age = val.trim().parse::<i64>().ok().or(max_age),
                _ => {}
            }
        }
        let expires = match max_age {
            Some(seconds) => Some(expiry::offset(
                Utc::now(),
                TimeDelta::try_seconds(seconds),
                seconds < 0,
            )),
            None => expires,
        };
        Ok(Self {
            name: name.to_owned(),
            value: value.trim().to_owned(),
            expires,
        })
    }
}

/// In-process cookie jar with browser eviction rules: an assignment whose
/// expiry is not in the future removes the cookie, and expired cookies are
/// invisible to reads.
#[derive(Debug, Default, Clone)]
pub struct MemoryJar {
    entries: Vec<Entry>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }
    /// Live entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        let now = Utc::now();
        self.entries.iter().filter(move |e| e.live(now))
    }
    fn purge(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|e| e.live(now));
    }
}

impl Jar for MemoryJar {
    fn cookie(&self) -> String {
        self.entries()
            .map(|e| format!("{}={}", e.name, e.value))
            .collect::<Vec<String>>()
            .join("; ")
    }

    fn set_cookie(&mut self, assignment: &str) {
        let entry = match Entry::try_from(assignment) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("ignoring {}", e);
                return;
            }
        };
        let now = Utc::now();
        self.purge(now);
        let slot = self.entries.iter().position(|e| e.name == entry.name);
        match (slot, entry.live(now)) {
            (Some(i), true) => self.entries[i] = entry,
            (Some(i), false) => {
                self.entries.remove(i);
            }
            (None, true) => self.entries.push(entry),
            (None, false) => {}
        }
    }
}

impl FromIterator<Entry> for MemoryJar {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut jar = Self::new();
        for entry in iter {
            jar.set_cookie(&entry.to_string());
        }
        jar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_document_cookie() {
        let mut jar = MemoryJar::new();
        jar.set_cookie("a=1; path=/");
        jar.set_cookie("b=2; path=/");
        assert_eq!(jar.cookie(), "a=1; b=2");
    }

    #[test]
    fn replaces_in_place() {
        let mut jar = MemoryJar::new();
        jar.set_cookie("a=1");
        jar.set_cookie("b=2");
        jar.set_cookie("a=3");
        assert_eq!(jar.cookie(), "a=3; b=2");
    }

    #[test]
    fn past_expiry_evicts() {
        let mut jar = MemoryJar::new();
        jar.set_cookie("a=1; path=/");
        jar.set_cookie(&format!("a=; expires={}; path=/;", expiry::EPOCH));
        assert_eq!(jar.cookie(), "");
        assert_eq!(jar.entries().count(), 0);
    }

    #[test]
    fn max_age_beats_expires() {
        let mut jar = MemoryJar::new();
        jar.set_cookie("a=1; expires=Fri, 01 Jan 2100 00:00:00 GMT; max-age=0");
        assert_eq!(jar.cookie(), "");
        jar.set_cookie(&format!("b=2; expires={}; max-age=60", expiry::EPOCH));
        assert_eq!(jar.cookie(), "b=2");
    }

    #[test]
    fn rejects_pairs_without_names() {
        let mut jar = MemoryJar::new();
        jar.set_cookie("novalue");
        jar.set_cookie("=orphan");
        assert_eq!(jar.cookie(), "");
    }

    #[test]
    fn entries_round_trip_through_display() {
        let entry =
            Entry::try_from("a=1; expires=Fri, 01 Jan 2100 00:00:00 GMT; path=/").unwrap();
        assert_eq!(Entry::try_from(entry.to_string().as_str()), Ok(entry.clone()));
        let jar = MemoryJar::from_iter([entry]);
        assert_eq!(jar.cookie(), "a=1");
    }
}
