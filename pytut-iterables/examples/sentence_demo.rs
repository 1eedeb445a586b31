//! Iterable Teaching Classes Demonstration
//!
//! Shows the iterable-versus-iterator distinction with Sentence, then the
//! special-method surface of Vector2d.
//!
//! Run with: cargo run --example sentence_demo

use pytut_iterables::{Sentence, Vector2d};

fn main() {
    println!("=== Iterables: Sentence and Vector2d ===\n");

    // =========================================================================
    // Sentence: an iterable, not an iterator
    // =========================================================================
    println!("Sentence: an iterable, not an iterator");
    println!("{}", "=".repeat(60));

    let s = Sentence::new("\"The time has come,\" the Walrus said");
    println!("The sentence: {s:?}");

    println!("\nFirst pass over its words:");
    for word in &s {
        print!(" {word}");
    }
    println!();

    println!("Second, independent pass (a fresh cursor each time):");
    for word in &s {
        print!(" {word}");
    }
    println!();

    println!("\nThe generator version yields the same sequence:");
    let via_gen: Vec<&str> = s.words_gen().collect();
    println!(" {via_gen:?}");

    // A single cursor, by contrast, is spent once exhausted
    let mut cursor = (&s).into_iter();
    let spent = cursor.by_ref().count();
    println!("\nA cursor drained {spent} words; one more next() gives: {:?}", cursor.next());

    // =========================================================================
    // Vector2d: the special-method surface of a small class
    // =========================================================================
    println!("\n\nVector2d");
    println!("{}", "=".repeat(60));

    let v = Vector2d::new(3, 4);
    println!("repr:      {v:?}");
    println!("str:       {v}");
    println!("magnitude: {}", v.magnitude());
    println!("equals (3.0, 4.0)? {}", v == (3.0, 4.0));

    // Unpacking works because the vector iterates over its components
    let mut components = v.into_iter();
    let (x, y) = (components.next().unwrap(), components.next().unwrap());
    println!("unpacked:  x = {x}, y = {y}");

    println!("truthy?    {}", v.is_truthy());
    println!(
        "Vector2d(0, 0) truthy? {}",
        Vector2d::new(0, 0).is_truthy()
    );
}
