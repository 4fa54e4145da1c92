//! Atom splitting
//!
//! Tokenizes DICT reply lines into atoms: whitespace-separated fields,
//! with double-quoted substrings kept together as single atoms.

/// Split a reply line into atoms
///
/// Plain runs of non-whitespace characters are single atoms. A substring
/// enclosed in double quotes is a single atom with the quotes stripped
/// and internal spaces preserved, so `151 word db "A longer description"`
/// yields four atoms.
///
/// An unmatched opening quote is handled leniently: the remainder of the
/// line becomes one trailing atom. The protocol guarantees well-formed
/// atoms in practice, so this is not treated as an error.
pub fn split_atoms(line: &str) -> Vec<String> {
    let mut atoms = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        if let Some(quoted) = rest.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => {
                    atoms.push(quoted[..end].to_string());
                    rest = &quoted[end + 1..];
                }
                None => {
                    // Unmatched quote: the rest of the line is one atom
                    atoms.push(quoted.to_string());
                    break;
                }
            }
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace())
                .unwrap_or(rest.len());
            atoms.push(rest[..end].to_string());
            rest = &rest[end..];
        }
    }

    atoms
}
