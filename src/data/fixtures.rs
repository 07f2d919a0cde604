// Shared test fixtures: short real games as trajectories.

use shakmaty::Chess;

use crate::domain::trajectory::Trajectory;

/// Morphy's "Opera game", 33 plies ending in mate.
pub const OPERA_GAME: &str = "e4 e5 Nf3 d6 d4 Bg4 dxe5 Bxf3 Qxf3 dxe5 Bc4 Nf6 \
    Qb3 Qe7 Nc3 c6 Bg5 b5 Nxb5 cxb5 Bxb5+ Nbd7 O-O-O Rd8 Rxd7 Rxd7 Rd1 Qe6 \
    Bxd7+ Nxd7 Qb8+ Nxb8 Rd8";

/// A quiet Queen's Gambit Declined line, 40 plies, no mate.
pub const QGD_LINE: &str = "d4 d5 c4 e6 Nc3 Nf6 Bg5 Be7 e3 O-O Nf3 Nbd7 Rc1 c6 \
    Bd3 dxc4 Bxc4 Nd5 Bxe7 Qxe7 O-O Nxc3 Rxc3 e5 Qc2 exd4 exd4 Nf6 Re1 Qd6 \
    Ne5 Be6 Bxe6 fxe6 Qb3 Rab8 Rce3 Nd5 R3e2 b5";

pub fn opera() -> Trajectory {
    Trajectory::from_san_line("opera", Chess::default(), OPERA_GAME).expect("opera game is legal")
}

pub fn qgd() -> Trajectory {
    Trajectory::from_san_line("qgd", Chess::default(), QGD_LINE).expect("qgd line is legal")
}

pub fn corpus() -> Vec<Trajectory> {
    vec![opera(), qgd()]
}
