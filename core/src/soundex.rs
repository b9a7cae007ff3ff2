//! Soundex phonetic codes: one letter followed by three consonant-class digits.

fn class_digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Encode `name` as a 4-character Soundex code.
///
/// The first character is kept as-is (after uppercasing). Every later character
/// contributes its class digit unless it equals the digit of the character directly
/// before it; uncoded characters (vowels, `H`, `W`, punctuation) emit nothing but
/// break a run, so `"Ashcraft"` encodes `S` and `C` separately. The result is
/// zero-padded and truncated to four characters. An empty name yields an empty string.
pub fn soundex(name: &str) -> String {
    let upper = name.to_uppercase();
    let mut chars = upper.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut digits = String::new();
    let mut last: Option<char> = None;
    for c in chars {
        let digit = class_digit(c);
        if let Some(d) = digit {
            if digit != last {
                digits.push(d);
            }
        }
        last = digit;
    }

    let mut code = String::with_capacity(8);
    code.push(first);
    // class digits are 1-6, so this never drops anything
    code.extend(digits.chars().filter(|&d| d != '0'));
    code.push_str("0000");
    code.chars().take(4).collect()
}
