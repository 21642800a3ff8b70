//! A private mentor list, unlisted and hidden behind a passphrase.

const PASSPHRASE: &str = "clarity";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mentor {
    pub name: &'static str,
    pub role: &'static str,
    pub note: &'static str,
}

pub const MENTORS: &[Mentor] = &[
    Mentor {
        name: "Maya Patel",
        role: "Operator · Systems thinker",
        note: "Holds an honest lens on founder flow.",
    },
    Mentor {
        name: "Carlos Nunez",
        role: "Product + design mentor",
        note: "Calms the room and bets on craft.",
    },
    Mentor {
        name: "Aditi Rao",
        role: "Venture partner",
        note: "Signals when clarity can meet risk.",
    },
];

/// Case and surrounding whitespace are ignored.
pub fn unlocks(passphrase: &str) -> bool {
    passphrase.trim().eq_ignore_ascii_case(PASSPHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passphrase_ignores_case_and_padding() {
        assert!(unlocks("clarity"));
        assert!(unlocks("  Clarity\n"));
        assert!(!unlocks("clarity please"));
        assert!(!unlocks(""));
    }
}
