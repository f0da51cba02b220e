/// Left-pad `s` with `fill` until it is at least `width` characters long.
///
/// `width` is a floor, not a cap: input that is already `width` characters or
/// longer comes back unchanged and is never truncated. Both the mnemonic column
/// and the binary word column of a dump rely on this.
pub fn pad_left(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(fill).take(width - len));
    out.push_str(s);
    out
}

#[cfg(test)]
mod tests {
    use super::pad_left;

    #[test]
    fn pads_short_input() {
        assert_eq!(pad_left("ADD", 4, '0'), "0ADD");
        assert_eq!(pad_left("", 4, '0'), "0000");
        assert_eq!(pad_left("101", 8, '0'), "00000101");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(pad_left("ADDI R1", 4, '0'), "ADDI R1");
        assert_eq!(pad_left("NOP_", 4, '0'), "NOP_");
    }
}
