use polysum::union::Sum3;

fn main() {
    let value: Sum3<i32, String, bool> = Sum3::First(1);
    // Three channels require three handlers; the bool handler is missing.
    let _ = value.fold(|x: i32| x, |s: String| s.len() as i32);
}
