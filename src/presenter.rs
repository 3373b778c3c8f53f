use std::io::Write;

use strum::VariantArray;
use strum_macros::{Display, VariantArray};

use crate::feed::Writeup;

const RULE: &str = "-------------------------------------------------------";
const SEPARATOR: &str = " | ";

const BANNER: &str = r"
╔╗ ╔╗ ╦ ╦
╠╩╗╠╩╗║║║
╚═╝╚═╝╚╩╝

- Get list of latest bug bounty writeups
- Author: n3hal_ (github.com/Nehal-Zaman)
";

#[derive(Display, Debug, VariantArray, Clone, Copy)]
enum Field {
    #[strum(to_string = "Title")]
    Title,

    #[strum(to_string = "Link(s)")]
    Links,

    #[strum(to_string = "Author(s)")]
    Authors,

    #[strum(to_string = "Program(s)")]
    Programs,

    #[strum(to_string = "Bug(s)")]
    Bugs,

    #[strum(to_string = "Bounty")]
    Bounty,

    #[strum(to_string = "Publication date")]
    PublicationDate,

    #[strum(to_string = "Added date")]
    AddedDate,
}

impl Field {
    fn value(self, writeup: &Writeup) -> String {
        match self {
            Self::Title => writeup.titles().collect::<Vec<_>>().join(SEPARATOR),
            Self::Links => writeup.urls().collect::<Vec<_>>().join(SEPARATOR),
            Self::Authors => writeup.authors.join(SEPARATOR),
            Self::Programs => writeup.programs.join(SEPARATOR),
            // Bugs have always been space separated.
            Self::Bugs => writeup.bugs.join(" "),
            Self::Bounty => writeup.bounty.clone(),
            Self::PublicationDate => writeup.publication_date.clone(),
            Self::AddedDate => writeup.added_date.clone(),
        }
    }
}

pub fn print_banner(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{BANNER}")
}

pub fn print_details(out: &mut impl Write, writeup: &Writeup) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    for field in Field::VARIANTS {
        writeln!(out, "{field} : {}", field.value(writeup))?;
    }
    Ok(())
}
