use polysum::union::Sum2;

fn main() {
    let value: Sum2<i32, String> = Sum2::First(1);
    // Two channels admit exactly two handlers, never a third.
    let _ = value.fold(|x: i32| x, |s: String| s.len() as i32, |b: bool| i32::from(b));
}
