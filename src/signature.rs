use crate::feed::Writeup;

const SEPARATOR: &str = " | ";

/// Identity of a writeup: titles, links, authors and publication date.
/// Programs, bugs, bounty and added date are not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub titles: String,
    pub links: String,
    pub authors: String,
    pub publication_date: String,
}

pub fn signature(writeup: &Writeup) -> Signature {
    Signature {
        titles: join(writeup.titles()),
        links: join(writeup.urls()),
        authors: join(writeup.authors.iter().map(String::as_str)),
        publication_date: writeup.publication_date.clone(),
    }
}

pub fn is_same(a: &Writeup, b: &Writeup) -> bool {
    signature(a) == signature(b)
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(SEPARATOR)
}
