use dungeon::error::{GameError, GameResult, MapError, NavigationError, ParseError};
use dungeon::map::direction::Direction;
use dungeon::map::Dungeon;
use std::io;

#[test]
fn test_game_error_from_parse_error() {
    let parse_error = ParseError::MissingColon {
        line: 1,
        token: "eb0".to_string(),
    };
    let game_error: GameError = parse_error.into();
    assert!(matches!(game_error, GameError::MapParse(_)));
}

#[test]
fn test_game_error_from_map_error() {
    let map_error = MapError::RoomNotFound(42);
    let game_error: GameError = map_error.into();
    assert!(matches!(game_error, GameError::Map(_)));
}

#[test]
fn test_game_error_from_navigation_error() {
    let navigation_error = NavigationError::UnknownDirection {
        position: 0,
        character: 'z',
    };
    let game_error: GameError = navigation_error.into();
    assert!(matches!(game_error, GameError::Navigation(_)));
}

#[test]
fn test_game_error_from_io_error() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let game_error: GameError = io_error.into();
    assert!(matches!(game_error, GameError::Io(_)));
}

#[test]
fn test_game_error_from_figment_error() {
    let figment_error = figment::Error::from("bad value".to_string());
    let game_error: GameError = figment_error.into();
    assert!(matches!(game_error, GameError::Config(_)));
}

#[test]
fn test_error_display() {
    let parse_error = ParseError::UnknownDirection {
        line: 3,
        token: "x".to_string(),
    };
    assert_eq!(parse_error.to_string(), "line 3: unknown direction 'x'");

    let game_error: GameError = parse_error.into();
    assert_eq!(game_error.to_string(), "Map parsing error: line 3: unknown direction 'x'");

    let map_error = MapError::UnknownRoom("zz".to_string());
    assert_eq!(map_error.to_string(), "No room named 'zz'");

    let no_exit = NavigationError::NoExit {
        position: 2,
        direction: Direction::North,
    };
    assert_eq!(no_exit.to_string(), "no exit north at 2");
}

#[test]
fn test_navigation_error_character() {
    let unknown = NavigationError::UnknownDirection {
        position: 4,
        character: '?',
    };
    assert_eq!(unknown.character(), '?');
    assert_eq!(unknown.position(), 4);

    let no_exit = NavigationError::NoExit {
        position: 1,
        direction: Direction::West,
    };
    assert_eq!(no_exit.character(), 'w');
    assert_eq!(no_exit.position(), 1);
}

#[test]
fn test_dungeon_errors() {
    let result: GameResult<Dungeon> = Dungeon::new("", None);
    assert!(matches!(result, Err(GameError::Map(MapError::EmptyDungeon))));

    let result = Dungeon::new("a0 e:b0\n", Some("c0"));
    assert!(matches!(result, Err(GameError::Map(MapError::UnknownRoom(name))) if name == "c0"));

    let result = Dungeon::new("a0 e:b0\nb0 y:a0\n", None);
    assert!(matches!(result, Err(GameError::MapParse(ParseError::UnknownDirection { line: 2, .. }))));

    let result = Dungeon::from_file("no/such/map.txt", None);
    assert!(matches!(result, Err(GameError::Io(_))));
}
