//! Accent folding for letter comparison
//!
//! Dictionary entries carry circumflexed vowels (`hâlâ`, `kâğıt`) that players
//! never type. Every comparison between a guess and the dictionary goes through
//! [`normalize`], while the original spelling is kept for display and lookups.
//! [`lowercase_tr`] lowercases with the Turkish dotted and dotless I.

/// Accented letters and their plain counterparts, case preserved.
const FOLDS: [(char, char); 6] = [
    ('Â', 'A'),
    ('Î', 'I'),
    ('Û', 'U'),
    ('â', 'a'),
    ('î', 'i'),
    ('û', 'u'),
];

/// Fold a single letter
///
/// Letters outside the fold table are returned unchanged.
///
/// # Examples
/// ```
/// use kelime::core::normalize_char;
///
/// assert_eq!(normalize_char('â'), 'a');
/// assert_eq!(normalize_char('Î'), 'I');
/// assert_eq!(normalize_char('ş'), 'ş');
/// ```
#[inline]
#[must_use]
pub fn normalize_char(letter: char) -> char {
    FOLDS
        .iter()
        .find(|(accented, _)| *accented == letter)
        .map_or(letter, |&(_, plain)| plain)
}

/// Fold every accented letter of `text`
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
/// ```
/// use kelime::core::normalize;
///
/// assert_eq!(normalize("kâğıt"), "kağıt");
/// assert_eq!(normalize("HÂLÂ"), "HALA");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

/// Lowercase with Turkish casing: `I` becomes `ı` and `İ` becomes `i`
///
/// # Examples
/// ```
/// use kelime::core::lowercase_tr;
///
/// assert_eq!(lowercase_tr("İKİZ"), "ikiz");
/// assert_eq!(lowercase_tr("IRMAK"), "ırmak");
/// ```
#[must_use]
pub fn lowercase_tr(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'I' => 'ı'.to_lowercase(),
            'İ' => 'i'.to_lowercase(),
            c => c.to_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_lowercase_circumflex() {
        assert_eq!(normalize("hâlâ"), "hala");
        assert_eq!(normalize("îman"), "iman");
        assert_eq!(normalize("mahkûm"), "mahkum");
    }

    #[test]
    fn folds_uppercase_circumflex() {
        assert_eq!(normalize("Âlim"), "Alim");
        assert_eq!(normalize("ÎÛ"), "IU");
    }

    #[test]
    fn leaves_turkish_letters_alone() {
        assert_eq!(normalize("çğıöşü"), "çğıöşü");
        assert_eq!(normalize("ÇĞİÖŞÜ"), "ÇĞİÖŞÜ");
    }

    #[test]
    fn is_idempotent() {
        for text in ["kâğıt", "HÂLÂ", "", "plain", "îûâÎÛÂ", "şeker"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn turkish_lowercase_keeps_one_char_per_letter() {
        let text = "İSTANBUL IĞDIR Âşık";
        let lower = lowercase_tr(text);
        assert_eq!(lower, "istanbul ığdır âşık");
        assert_eq!(lower.chars().count(), text.chars().count());
    }

    #[test]
    fn preserves_length_in_chars() {
        let text = "kâğıt";
        assert_eq!(normalize(text).chars().count(), text.chars().count());
    }
}
