//! Chapter 9 Demonstration: Iterators, Generators, Generator Expressions
//!
//! This example walks through sections 9.8-9.10, showing how Python's
//! iterator protocol maps onto Rust's Iterator trait and how generator
//! expressions become lazy combinator pipelines.
//!
//! Run with: cargo run --example iterators_demo

use pytut_chapter9::section_9_10::{dot_product, sum_of_squares, unique_words};
use pytut_chapter9::section_9_8::{spell_out, Reverse};
use pytut_chapter9::section_9_9::{reverse_from_fn, reverse_idiomatic, ReverseGen};

fn main() {
    println!("=== Chapter 9: Classes - the iteration sections ===\n");

    // =========================================================================
    // Section 9.8: Iterators
    // =========================================================================
    println!("Section 9.8: The for statement, desugared");
    println!("{}", "=".repeat(60));

    println!("for letter in \"ABC\" really does iter()/next() until the end:");
    for letter in spell_out("ABC") {
        println!("  {letter}");
    }

    println!("\nLooping over a sequence backwards with a class-based iterator:");
    print!("  Reverse(\"spam\") yields:");
    for ch in Reverse::of_str("spam") {
        print!(" {ch}");
    }
    println!();

    let mut exhausted = Reverse::of_str("ab");
    exhausted.next();
    exhausted.next();
    println!("  one more next() on the exhausted iterator: {:?}", exhausted.next());

    // =========================================================================
    // Section 9.9: Generators
    // =========================================================================
    println!("\n\nSection 9.9: Generators");
    println!("{}", "=".repeat(60));

    let letters: Vec<char> = "golf".chars().collect();

    println!("The reverse(data) generator, three ways:");
    let as_state_machine: String = ReverseGen::new(&letters).collect();
    println!("  explicit state machine: {as_state_machine}");

    let as_closure: String = reverse_from_fn(&letters).collect();
    println!("  iter::from_fn closure:  {as_closure}");

    let as_combinator: String = reverse_idiomatic(&letters).collect();
    println!("  .iter().rev() idiom:    {as_combinator}");

    // =========================================================================
    // Section 9.10: Generator Expressions
    // =========================================================================
    println!("\n\nSection 9.10: Generator Expressions");
    println!("{}", "=".repeat(60));

    println!("sum(i*i for i in range(10)):");
    println!("  {}", sum_of_squares(10));

    println!("\nsum(x*y for x, y in zip(x_vec, y_vec)):");
    let x_vec = [10, 20, 30];
    let y_vec = [7, 5, 3];
    println!("  {:?} . {:?} = {}", x_vec, y_vec, dot_product(&x_vec, &y_vec));

    println!("\nset(word for line in page for word in line.split()):");
    let page = ["the quick brown fox", "jumps over the lazy dog"];
    let mut words: Vec<String> = unique_words(page).into_iter().collect();
    words.sort();
    println!("  {} unique words: {:?}", words.len(), words);

    // =========================================================================
    // Conclusion
    // =========================================================================
    println!("\n\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("{}", "=".repeat(60));
    println!("1. Python's iter()/next()/StopIteration is IntoIterator/next()/None");
    println!("2. Exhaustion is a value, not an exception - loops end normally");
    println!("3. A generator is an iterator whose cursor the compiler writes for you");
    println!("4. Generator expressions are lazy pipelines; Rust iterators already are");
    println!("{}", "=".repeat(60));
}
