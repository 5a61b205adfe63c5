use super::*;

#[test]
fn test_initial_layout() {
    let board = Board::initial();
    assert_eq!(board.count(Player::Red), 12);
    assert_eq!(board.count(Player::Black), 12);

    for pc in board.pieces() {
        assert!(pc.position.is_playable(), "{} on a light square", pc.position);
        assert!(
            !(3..5).contains(&pc.position.row),
            "no piece may start on the middle rows"
        );
        assert_eq!(pc.rank, Rank::Normal);
        let expected_rows = match pc.owner {
            Player::Black => 0..3,
            Player::Red => 5..8,
        };
        assert!(expected_rows.contains(&pc.position.row));
    }
}

#[test]
fn test_piece_at_and_pieces_of() {
    let board = Board::initial();
    let pc = board.piece_at(Position::new(0, 1)).expect("black man on (0, 1)");
    assert_eq!(pc.owner, Player::Black);
    assert!(board.piece_at(Position::new(0, 0)).is_none());
    assert!(board.piece_at(Position::new(4, 3)).is_none());
    assert!(board.pieces_of(Player::Red).all(|p| p.owner == Player::Red));
}

#[test]
fn test_place_rejects_light_square() {
    let mut board = Board::empty();
    let err = board
        .place(Player::Red, Rank::Normal, Position::new(4, 4))
        .unwrap_err();
    assert_eq!(err, BoardError::UnplayableSquare(Position::new(4, 4)));
}

#[test]
fn test_place_rejects_occupied_square() {
    let mut board = Board::empty();
    board.place(Player::Red, Rank::Normal, Position::new(4, 3)).unwrap();
    let err = board
        .place(Player::Black, Rank::King, Position::new(4, 3))
        .unwrap_err();
    assert_eq!(err, BoardError::Occupied(Position::new(4, 3)));
}

#[test]
fn test_place_rejects_thirteenth_piece() {
    let mut board = Board::initial();
    let err = board
        .place(Player::Red, Rank::Normal, Position::new(4, 3))
        .unwrap_err();
    assert_eq!(err, BoardError::TooManyPieces(Player::Red));
}

#[test]
#[should_panic(expected = "off the board")]
fn test_position_out_of_range_panics() {
    let _ = Position::new(8, 1);
}

#[test]
fn test_diagram_round_trip() {
    let diagram = "\
        .b.b.b.b
        b.b.b.b.
        .b.b.b.b
        ........
        ........
        r.r.r.r.
        .r.r.r.r
        r.r.r.r.
    ";
    let board = Board::from_diagram(diagram);
    assert_eq!(board.to_string(), Board::initial().to_string());
}

#[test]
fn test_diagram_ranks() {
    let board = Board::from_diagram(
        "
        .B......
        ........
        ...X....
        ........
        .....Y..
        ........
        .......R
        ........
        ",
    );
    assert_eq!(board.piece_at(Position::new(0, 1)).unwrap().rank, Rank::King);
    assert_eq!(board.piece_at(Position::new(2, 3)).unwrap().rank, Rank::SuperKing);
    assert_eq!(board.piece_at(Position::new(4, 5)).unwrap().owner, Player::Black);
    assert_eq!(board.piece_at(Position::new(6, 7)).unwrap().owner, Player::Red);
}

#[test]
fn test_relocate_and_remove_keep_index_in_sync() {
    let mut board = Board::empty();
    let id = board.place(Player::Red, Rank::Normal, Position::new(5, 0)).unwrap();
    board.relocate(id, Position::new(4, 1));
    assert!(board.piece_at(Position::new(5, 0)).is_none());
    assert_eq!(board.piece_at(Position::new(4, 1)).unwrap().id, id);

    let removed = board.remove(id).unwrap();
    assert_eq!(removed.position, Position::new(4, 1));
    assert!(board.piece_at(Position::new(4, 1)).is_none());
    assert!(board.is_empty());
}

#[test]
fn test_serde_validates_pieces() {
    let board = Board::initial();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);

    // Two pieces on the same square must be rejected.
    let mut pieces: Vec<Piece> = board.into();
    pieces[1].position = pieces[0].position;
    let json = serde_json::to_string(&pieces).unwrap();
    assert!(serde_json::from_str::<Board>(&json).is_err());
}

#[test]
fn test_place_after_highest_id_reuses_free_id() {
    let top = Piece {
        id: PieceId(u8::MAX),
        owner: Player::Black,
        rank: Rank::King,
        position: Position::new(0, 1),
        must_continue_capture: false,
    };
    let mut board = Board::from_pieces([top]).unwrap();
    let id = board.place(Player::Red, Rank::Normal, Position::new(5, 0)).unwrap();
    assert_eq!(id, PieceId(0));
    assert_eq!(board.len(), 2);

    let next = board.place(Player::Red, Rank::Normal, Position::new(5, 2)).unwrap();
    assert_eq!(next, PieceId(1));
}
