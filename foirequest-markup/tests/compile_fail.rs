//! Compile-fail tests to ensure proper error messages for incorrect usage.
//!
//! These tests verify that the derive macros produce helpful compiler errors
//! when used incorrectly, such as:
//! - Deriving on an enum or a tuple struct
//! - Leaving a role unassigned, assigning it twice, or misspelling it

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
