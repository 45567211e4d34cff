//! Pairwise alignment report demo
//!
//! Aligns two sequences and prints the aligned region in parentheses between
//! the unaligned flanks, with the two lines padded so matching columns sit
//! on top of each other. Report rendering lives here, outside the library.
//!
//! Run with: cargo run --example pairwise_report

use swalign::{Alignment, Scoring, SmithWaterman};

fn render(label: &str, sequence: &[u8], aligned: &[u8], start: usize, end: usize) -> String {
    format!(
        "{} {} ({}) {}",
        label,
        String::from_utf8_lossy(&sequence[..start]),
        String::from_utf8_lossy(aligned),
        String::from_utf8_lossy(&sequence[end..]),
    )
}

fn print_report(query: &[u8], reference: &[u8], alignment: &Alignment) {
    let qry_line = render(
        "Qry:",
        query,
        &alignment.query_aligned,
        alignment.query_start,
        alignment.query_end,
    );
    let ref_line = render(
        "Ref:",
        reference,
        &alignment.ref_aligned,
        alignment.ref_start,
        alignment.ref_end,
    );

    // Pad the line whose flank is shorter so the aligned regions line up.
    if alignment.query_start < alignment.ref_start {
        let pad = alignment.ref_start - alignment.query_start;
        println!("{}{}", " ".repeat(pad), qry_line);
        println!("{}", ref_line);
    } else {
        println!("{}", qry_line);
        let pad = alignment.query_start - alignment.ref_start;
        println!("{}{}", " ".repeat(pad), ref_line);
    }

    println!();
    println!(
        "Score {}, query {}..{}, reference {}..{}",
        alignment.score,
        alignment.query_start,
        alignment.query_end,
        alignment.ref_start,
        alignment.ref_end
    );
    println!(
        "{} matches, {} mismatches, {} gaps over {} columns ({:.1}% identity)",
        alignment.matches,
        alignment.mismatches,
        alignment.gaps,
        alignment.len(),
        alignment.identity() * 100.0
    );
    println!("CIGAR: {}", alignment.cigar_string());
}

fn main() -> swalign::Result<()> {
    let query = b"ATAAATGATGGGAACGAGATCCCGGAGGCTCGGATTGGTATGACAAGGTGTATCGTGATCGTCGGTGCGTCAGCTTGGGC";
    let reference =
        b"GGTAAGGTATAGCTGCATCCTACTTACGATGTGAAGTTACACACCTCAACTCCAGAGTCCCGTTGGGGGAGTGTATTTTT";

    let engine = SmithWaterman::new(query, reference, Scoring::default())?;

    println!("Smith-Waterman local alignment\n");
    print_report(query, reference, engine.alignment());

    Ok(())
}
