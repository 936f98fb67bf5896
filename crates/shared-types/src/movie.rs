use serde::{Deserialize, Serialize};
use std::fmt;

/// Image host prefix every poster path is appended to.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Route prefix for movie detail pages.
pub const MOVIE_ROUTE_PREFIX: &str = "/movie";

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Identifier of a movie as handed out by the catalog.
///
/// TMDB uses integers, but other sources key movies by slug, so both shapes
/// deserialize from the same field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Numeric(n) => write!(f, "{n}"),
            MovieId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for MovieId {
    fn from(n: u64) -> Self {
        MovieId::Numeric(n)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId::Text(s.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        MovieId::Text(s)
    }
}

impl MovieId {
    /// Parse a route segment back into an id.
    ///
    /// All-digit segments become `Numeric` so that `/movie/42` matches the
    /// record whose JSON id was `42`.
    pub fn from_segment(segment: &str) -> Self {
        match segment.parse::<u64>() {
            Ok(n) => MovieId::Numeric(n),
            Err(_) => MovieId::Text(segment.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Movie
// ---------------------------------------------------------------------------

/// The subset of a movie record the preview cards display.
///
/// Extra fields in the source JSON (overview, release date, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, poster_path: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            poster_path: poster_path.map(str::to_string),
        }
    }

    /// Detail page path, `/movie/{id}`.
    pub fn detail_path(&self) -> String {
        detail_path(&self.id)
    }

    /// Full poster URL. The poster path is appended verbatim; an absent path
    /// yields the bare host prefix and the image fallback takes over.
    pub fn poster_url(&self) -> String {
        format!(
            "{POSTER_BASE_URL}{}",
            self.poster_path.as_deref().unwrap_or_default()
        )
    }

    /// Accessible description of the poster image.
    pub fn poster_alt(&self) -> String {
        format!("{} Poster", self.title)
    }
}

/// Detail page path for a movie id.
pub fn detail_path(id: &MovieId) -> String {
    format!("{MOVIE_ROUTE_PREFIX}/{id}")
}

// ---------------------------------------------------------------------------
// Transition keys
// ---------------------------------------------------------------------------

/// Which part of a movie card a transition key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionSlot {
    Image,
    Title,
}

impl TransitionSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionSlot::Image => "image",
            TransitionSlot::Title => "title",
        }
    }
}

/// Key shared by elements that represent the same movie part on different
/// pages. Two elements carrying equal keys are interpolated between layouts,
/// so a key must never be reused for a different movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey {
    slot: TransitionSlot,
    id: MovieId,
}

impl TransitionKey {
    pub fn new(slot: TransitionSlot, id: &MovieId) -> Self {
        Self {
            slot,
            id: id.clone(),
        }
    }

    /// `image:{id}`
    pub fn image(id: &MovieId) -> Self {
        Self::new(TransitionSlot::Image, id)
    }

    /// `title:{id}`
    pub fn title(id: &MovieId) -> Self {
        Self::new(TransitionSlot::Title, id)
    }

    pub fn slot(&self) -> TransitionSlot {
        self.slot
    }

    /// CSS `view-transition-name` for this key.
    ///
    /// The result is a valid CSS identifier and distinct keys never map to the
    /// same name: characters outside `[A-Za-z0-9-]` are written as `_{hex}_`.
    pub fn view_transition_name(&self) -> String {
        let id = self.id.to_string();
        let mut name = String::with_capacity(self.slot.as_str().len() + 1 + id.len());
        name.push_str(self.slot.as_str());
        name.push('-');
        for c in id.chars() {
            if c.is_ascii_alphanumeric() || c == '-' {
                name.push(c);
            } else {
                name.push_str(&format!("_{:x}_", c as u32));
            }
        }
        name
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slot.as_str(), self.id)
    }
}
