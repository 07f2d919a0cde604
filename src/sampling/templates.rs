// ============================================================
// Layer 5 — Question Templates
// ============================================================
// Natural-language phrasings for every category. Each category
// has two or three interchangeable phrasings; one is drawn at
// random per accepted sample so the dataset does not teach a
// single fixed sentence.
//
// The wording (including its grammar slips, e.g. "does white
// has castling rights") is part of the published dataset format
// and is kept verbatim.
//
// Templates are only rendered for accepted samples, so the
// number of random draws depends only on what gets accepted.

use rand::Rng;

use crate::domain::piece::{square_name, PieceKind, Side};

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options[rng.gen_range(0..options.len())]
}

pub fn checkmate<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, &["is this a checkmate", "is the game over with a checkmate"]).to_string()
}

pub fn stalemate<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(
        rng,
        &[
            "is this a stalemate",
            "is the game stalemate",
            "is the game over with a stalemate",
        ],
    )
    .to_string()
}

pub fn castling_rights<R: Rng + ?Sized>(rng: &mut R, side: Side) -> String {
    match rng.gen_range(0..2) {
        0 => format!("does {side} has castling rights"),
        _ => format!("can {side} castle in future moves"),
    }
}

pub fn castle<R: Rng + ?Sized>(rng: &mut R, side: Side) -> String {
    match rng.gen_range(0..2) {
        0 => format!("can {side} castle"),
        _ => format!("is it ok for {side} to castle"),
    }
}

pub fn material_advantage<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, &["who has the material advantage?", "whose material has more value"]).to_string()
}

pub fn material_count<R: Rng + ?Sized>(rng: &mut R, side: Side) -> String {
    match rng.gen_range(0..2) {
        0 => format!("what is the material count of {side}"),
        _ => format!("how many material points does {side} have"),
    }
}

pub fn check<R: Rng + ?Sized>(rng: &mut R, side: Side) -> String {
    match rng.gen_range(0..2) {
        0 => format!("is {side} in check"),
        _ => format!("is {side} currently in check"),
    }
}

pub fn attack<R: Rng + ?Sized>(rng: &mut R, side: Side, piece: PieceKind, square: u8) -> String {
    let sq = square_name(square);
    match rng.gen_range(0..2) {
        0 => format!("does {side} {piece} attacks {sq}"),
        _ => format!("is {sq} under attack by {side} {piece}"),
    }
}

pub fn position<R: Rng + ?Sized>(rng: &mut R, square: u8) -> String {
    let sq = square_name(square);
    match rng.gen_range(0..2) {
        0 => format!("what piece is on {sq}"),
        _ => format!("what is on {sq}"),
    }
}

pub fn count_side<R: Rng + ?Sized>(rng: &mut R, side: Side) -> String {
    match rng.gen_range(0..2) {
        0 => format!("what is the number of pieces {side} has"),
        _ => format!("how many pieces {side} has"),
    }
}

pub fn count_board<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, &["how many pieces are on the board", "how many pieces are there"]).to_string()
}

pub fn existence_side<R: Rng + ?Sized>(rng: &mut R, side: Side, piece: PieceKind) -> String {
    match rng.gen_range(0..2) {
        0 => format!("is there a {side} {piece} on the board"),
        _ => format!("does {side} have a {piece}"),
    }
}

pub fn existence<R: Rng + ?Sized>(rng: &mut R, piece: PieceKind) -> String {
    match rng.gen_range(0..2) {
        0 => format!("is there any {piece} on the board"),
        _ => format!("does any side have a {piece}"),
    }
}

pub fn legal_move<R: Rng + ?Sized>(rng: &mut R, from: u8, to: u8) -> String {
    let uci = format!("{}{}", square_name(from), square_name(to));
    match rng.gen_range(0..2) {
        0 => format!("is {uci} a legal move"),
        _ => format!("can {uci} be made"),
    }
}

pub fn is_attacked<R: Rng + ?Sized>(rng: &mut R, side: Side, piece: PieceKind, square: u8) -> String {
    let sq = square_name(square);
    match rng.gen_range(0..2) {
        0 => format!("which piece is attacking {side} {piece} at {sq}"),
        _ => format!("what is the type of piece attacking {side} {piece} at {sq}"),
    }
}
