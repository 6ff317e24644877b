use oop_showcase::run_demo;

const EXPECTED_LINES: [&str; 10] = [
    "Inner class name: Inner Class",
    "Outer class name: Outer Class",
    "Message from static nested class.",
    "Dog barks.",
    "Dog is eating.",
    "Dog is sleeping.",
    "Static method in Parent class.",
    "Static method in Child class.",
    "Instance method in Child class.",
    "Cat meows.",
];

#[test]
fn run_demo_emits_exactly_the_ten_expected_lines() {
    let mut buf = Vec::new();
    run_demo(&mut buf).expect("demo run");
    let text = String::from_utf8(buf).expect("utf8 output");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), EXPECTED_LINES.len());
    assert_eq!(lines, EXPECTED_LINES);
    assert!(text.ends_with('\n'), "last line must be newline-terminated");
}

#[test]
fn run_demo_is_byte_identical_across_runs() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    run_demo(&mut first).expect("first run");
    run_demo(&mut second).expect("second run");
    assert_eq!(first, second);
}
