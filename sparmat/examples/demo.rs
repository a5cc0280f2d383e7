//! Walk-through of the container API: construction, growth, copies,
//! multiplication, clearing, predicate evaluation and error recovery.

use std::fmt;

use sparmat::{evaluate, Element, TripletMatrix};

/// Custom value type to show the container is not numeric-only
#[derive(Debug, Clone, PartialEq)]
struct Pair {
    a: String,
    b: String,
}

impl Pair {
    fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

impl Default for Pair {
    fn default() -> Self {
        Self::new("-", "-")
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

fn main() {
    // Element construction and printing
    let e1 = Element::new(0, 0, 42i64);
    println!("element e1 ({}, {}): {e1}\n", e1.row(), e1.col());

    let e2 = e1.clone();
    println!("element e2 ({}, {}) copy: {e2}\n", e2.row(), e2.col());

    let e3 = Element::from_signed(0, 0, 7i64);
    println!("element e3 ({}, {}) signed: {e3}\n", e3.row(), e3.col());

    // Fixed initial dimensions, nothing stored yet
    let m0: TripletMatrix<i64> = TripletMatrix::with_dims(4, 2, 0);
    println!("m0 (4 x 2):\n{m0}\n");

    // Growable matrix: dimensions follow the highest inserted position
    let mut m1 = TripletMatrix::new(0i64);
    m1.insert(0, 2, 25);
    m1.insert(0, 3, 14);
    m1.insert(0, 4, 25);
    m1.insert(1, 0, 22);
    m1.insert(1, 1, 23);
    m1.insert(1, 2, 15);
    m1.insert(2, 4, 11);
    m1.insert(3, 1, 5);
    m1.insert(3, 2, 23);
    m1.insert(4, 2, 4);
    println!("m1 (5 x 5):\n{m1}\n");

    // Same-type deep copy
    let mut m2 = m1.clone();
    println!("m2 (5 x 5) copy1:\n{m2}\n");

    // Cross-type copy with checked narrowing (i64 -> i32)
    let mut m3 = match TripletMatrix::<i32>::try_convert(&m1) {
        Ok(converted) => converted,
        Err(err) => {
            eprintln!("conversion failed: {err}");
            return;
        }
    };
    println!("m3 (5 x 5) copy2:\n{m3}\n");

    // Assignment replaces the whole state at once
    if let Err(err) = m2.assign_from(&m1) {
        eprintln!("assignment failed: {err}");
        return;
    }
    println!("m2 (5 x 5) copy3:\n{m2}\n");

    // Accessors
    println!("m0 rows: {}\n", m0.rows());
    println!("m1 cols: {}\n", m1.cols());
    println!("m2 nnz:  {}\n", m2.nnz());
    println!("m3 D:    {}\n", m3.default_value());

    // Adding a prebuilt element, then overwriting the same position
    let e4 = Element::new(0, 0, 1i32);
    println!("element e4 (0, 0): {e4}\n");
    m3.insert_element(e4);
    println!("m3 (5 x 5) add e4:\n{m3}\n");

    m3.insert(0, 0, 42);
    println!("m3 (5 x 5) overwrite (0, 0):\n{m3}\n");

    // Infallible indexing for positions known to be in bounds
    println!("m2(4, 2): {}\n", m2[(4, 2)]);

    // Multiplication over stored entries
    let mut m4 = TripletMatrix::new(0i64);
    m4.insert(0, 1, 4);
    m4.insert(0, 2, -2);
    m4.insert(1, 0, -4);
    m4.insert(1, 1, -3);
    let mut m5 = TripletMatrix::with_dims(3, 1, 0i64);
    m5.insert(0, 1, 1);
    m5.insert(1, 0, 1);
    m5.insert(1, 1, -1);
    m5.insert(2, 0, 2);
    m5.insert(2, 1, 3);
    println!("m4 (2 x 3):\n{m4}\n");
    println!("m5 (3 x 2):\n{m5}\n");
    match m4.multiply(&m5) {
        Ok(product) => println!("m4 * m5:\n{product}\n"),
        Err(err) => eprintln!("multiply failed: {err}"),
    }

    // Clearing drops the entries but keeps the dimensions
    m2.clear();
    println!("m2 (5 x 5) clear:\n{m2}\n");

    // String matrix with a length predicate
    let mut m6 = TripletMatrix::new(String::from("nil"));
    m6.insert(1, 1, String::from("yes"));
    m6.insert(1, 2, String::from("foobar"));
    m6.insert(2, 1, String::from("hello"));
    m6.insert(2, 2, String::from("rip"));
    println!("m6 (3 x 3):\n{m6}\n");

    let even = evaluate(&m1, |e| e.value % 2 == 0).unwrap_or(0);
    println!("m1 even values:            {even}\n");
    let positive = evaluate(&m3, |e| e.value >= 0).unwrap_or(0);
    println!("m3 positive values:        {positive}\n");
    let long = evaluate(&m6, |e| e.value.len() > 3).unwrap_or(0);
    println!("m6 values with length > 3: {long}\n");

    // Custom value type
    let mut m7 = TripletMatrix::new(Pair::default());
    m7.insert(0, 0, Pair::new("0", "0"));
    m7.insert(1, 1, Pair::new("1", "1"));
    m7.insert(2, 2, Pair::new("2", "2"));
    m7.insert(3, 3, Pair::new("3", "3"));
    println!("m7 (4 x 4):\n{m7}\n");

    // Out-of-range lookups are recoverable
    match m5.get(4, 2) {
        Ok(value) => println!("m5(4, 2): {value}\n"),
        Err(err) => eprintln!("out of range: {err}\n"),
    }
}
