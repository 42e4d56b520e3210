use chrono::NaiveDate;
use url::Url;

/// Card footprint on the works grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Large,
    Medium,
}

/// A headline number on a case study, e.g. `"$22.8M"`
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

impl Testimonial {
    /// Avatar initial
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

/// A portfolio project, rendered as a card and as a case study
#[derive(Debug, Clone)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub featured: bool,
    pub size: CardSize,
    pub date: NaiveDate,
    pub client: &'static str,
    pub services: &'static [&'static str],
    pub website: &'static str,
    pub about: &'static str,
    pub clients: &'static str,
    pub challenge: &'static str,
    pub results: Option<&'static str>,
    pub metrics: &'static [Metric],
    pub testimonial: Option<Testimonial>,
}

impl Project {
    /// Route path of the case study
    pub fn path(&self) -> String {
        format!("/works/{}", self.slug)
    }

    /// Human readable date, e.g. "January 25, 2026"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// The project's website, if it is a real absolute URL
    ///
    /// `"#"` placeholders and anything unparsable yield `None`.
    pub fn website_url(&self) -> Option<Url> {
        if self.website == "#" {
            return None;
        }
        Url::parse(self.website).ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub name: &'static str,
    pub label: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub title: &'static str,
    pub year: &'static str,
    pub org: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub period: &'static str,
    pub duration: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

/// One step of the working process timeline
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Short glyph shown in the pill
    pub glyph: &'static str,
}
