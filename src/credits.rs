// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Artist credit formatting.

/// Joins the primary artist and the featured artists.
const FEATURING: &str = " feat. ";
/// Separates featured artists from each other.
const SEPARATOR: &str = ", ";
/// Separates the last two featured artists.
const LAST_SEPARATOR: &str = " & ";

/// Format an ordered list of artist names as human-readable credit string.
///
/// The first name is the primary artist, all following names are featured artists:
///
/// ```
/// use ti_tag::format_credits;
///
/// assert_eq!(format_credits(&["A"]), "A");
/// assert_eq!(format_credits(&["A", "B", "C", "D"]), "A feat. B, C & D");
/// ```
#[must_use]
pub fn format_credits<S: AsRef<str>>(artists: &[S]) -> String {
    let Some((primary, featured)) = artists.split_first() else {
        return String::new();
    };

    let mut credit = primary.as_ref().to_string();
    if featured.is_empty() {
        return credit;
    }

    credit.push_str(FEATURING);
    let last_index = featured.len() - 1;
    for (i, artist) in featured.iter().enumerate() {
        if i > 0 {
            credit.push_str(if i == last_index {
                LAST_SEPARATOR
            } else {
                SEPARATOR
            });
        }
        credit.push_str(artist.as_ref());
    }

    credit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_artist() {
        assert_eq!(format_credits(&["A"]), "A");
    }

    #[test]
    fn test_two_artists() {
        assert_eq!(format_credits(&["A", "B"]), "A feat. B");
    }

    #[test]
    fn test_three_artists() {
        assert_eq!(format_credits(&["A", "B", "C"]), "A feat. B & C");
    }

    #[test]
    fn test_four_artists() {
        assert_eq!(format_credits(&["A", "B", "C", "D"]), "A feat. B, C & D");
    }

    #[test]
    fn test_many_artists() {
        assert_eq!(
            format_credits(&[
                "Daft Punk",
                "Pharrell Williams",
                "Nile Rodgers",
                "Paul Williams",
                "Todd Edwards"
            ]),
            "Daft Punk feat. Pharrell Williams, Nile Rodgers, Paul Williams & Todd Edwards"
        );
    }

    #[test]
    fn test_no_artists() {
        assert_eq!(format_credits::<&str>(&[]), "");
    }

    #[test]
    fn test_owned_names() {
        let names = vec![String::from("Jay-Z"), String::from("Alicia Keys")];
        assert_eq!(format_credits(&names), "Jay-Z feat. Alicia Keys");
    }
}
