/// Spreadsheet-style column name: 0 -> "A", 25 -> "Z", 26 -> "AA", 701 -> "ZZ".
#[must_use]
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        // n % 26 < 26, so the cast cannot truncate
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}
