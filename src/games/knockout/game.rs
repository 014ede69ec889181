//! Knock Out! game implementation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{
    Die, KnockOutConfig, KnockOutError, OneThroughTen, Player, PlayerId, RandomSource, Result,
    STANDARD_SIDES,
};
use crate::observer::GameObserver;
use crate::rules::{DiceGame, GameStatus, Outcome};

/// Score that wins the game.
pub const TARGET_SCORE: u32 = 100;

/// Largest die a game accepts, so that two faces always sum within `u32`.
pub const MAX_SIDES: u32 = u32::MAX / 2;

/// Report of a single player-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Round the turn was played in (starts at 1).
    pub round: u32,
    pub player: PlayerId,
    /// The two die faces.
    pub faces: [u32; 2],
    /// Sum of both faces.
    pub roll: u32,
    /// Whether the roll hit the player's knockout number.
    pub knocked_out: bool,
    /// The player's score after the turn.
    pub score: u32,
}

/// A game of Knock Out!.
///
/// Players take turns in roster order, rolling the die twice. Rolling your
/// own knockout number eliminates you; anything else is added to your score.
/// The game ends when a player reaches [`TARGET_SCORE`] or nobody is left.
///
/// Every roll sum is at least 2, so a game ends within
/// `players * (TARGET_SCORE / 2 + 1)` turns unless the random source fails.
pub struct KnockOut {
    die: Die,
    players: Vec<Player>,
    observer: Option<Weak<RefCell<dyn GameObserver>>>,
    status: GameStatus,
    /// Roster index the next turn search starts from.
    cursor: usize,
    round: u32,
    turns_taken: u32,
    aborted: bool,
}

impl KnockOut {
    /// Create a game with `player_count` players and a six-sided die.
    ///
    /// Knockout numbers are drawn from `source` first, in seat order; the die
    /// then takes ownership of it.
    pub fn new(player_count: u32, mut source: impl RandomSource + 'static) -> Result<Self> {
        if player_count == 0 {
            return Err(KnockOutError::invalid("player count must be at least 1"));
        }

        let players = PlayerId::all(player_count)
            .map(|id| Player::new(id, &mut source))
            .collect::<Result<Vec<_>>>()?;
        let die = Die::new(STANDARD_SIDES, source)?;

        Self::with_players(players, die)
    }

    /// Create a game from a config, using a seeded [`OneThroughTen`].
    pub fn from_config(config: &KnockOutConfig) -> Result<Self> {
        Self::new(config.player_count, OneThroughTen::new(config.seed))
    }

    /// Create a game from an explicit roster and die.
    ///
    /// The roster must be non-empty, have unique ids, and have at least one
    /// player who is not eliminated. The die may have at most [`MAX_SIDES`]
    /// sides.
    pub fn with_players(players: Vec<Player>, die: Die) -> Result<Self> {
        if die.sides() > MAX_SIDES {
            return Err(KnockOutError::invalid(format!(
                "a {}-sided die can overflow the roll sum; at most {MAX_SIDES} sides",
                die.sides()
            )));
        }

        if players.is_empty() {
            return Err(KnockOutError::invalid("roster must not be empty"));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(p.id())) {
            return Err(KnockOutError::invalid(format!(
                "{} appears more than once in the roster",
                dup.id()
            )));
        }

        if !players.iter().any(Player::is_active) {
            return Err(KnockOutError::invalid("roster has no active players"));
        }

        Ok(Self {
            die,
            players,
            observer: None,
            status: GameStatus::NotStarted,
            cursor: 0,
            round: 0,
            turns_taken: 0,
            aborted: false,
        })
    }

    /// Attach an observer.
    ///
    /// The game only keeps a weak reference. Once the caller drops its last
    /// `Rc`, notifications stop without error.
    pub fn set_observer<O: GameObserver + 'static>(&mut self, observer: &Rc<RefCell<O>>) {
        let observer: Rc<RefCell<dyn GameObserver>> = observer.clone();
        self.observer = Some(Rc::downgrade(&observer));
    }

    /// Detach the observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// The outcome, once the game has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Current round (0 before the game starts).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turns played so far.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Whether a random source failure aborted the game.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Play the game to the end from its current position.
    ///
    /// Resumes a game that was partially advanced with [`KnockOut::step`].
    pub fn play(&mut self) -> Result<Outcome> {
        loop {
            self.step()?;
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Advance the game by exactly one player-turn.
    ///
    /// The first call starts the game. A random source failure is returned
    /// as is and aborts the game: it stays `Running`, and every later call
    /// fails with [`KnockOutError::Aborted`].
    pub fn step(&mut self) -> Result<Turn> {
        if self.aborted {
            return Err(KnockOutError::Aborted);
        }

        match self.status {
            GameStatus::Finished(_) => return Err(KnockOutError::GameOver),
            GameStatus::NotStarted => self.start(),
            GameStatus::Running => {}
        }

        // A running game always has an active player
        let (index, new_round) = self.next_active().ok_or(KnockOutError::GameOver)?;

        let faces = match self.roll_pair() {
            Ok(faces) => faces,
            Err(err) => {
                warn!(error = %err, "random source failed, aborting game");
                self.aborted = true;
                return Err(err);
            }
        };
        // Faces are at most MAX_SIDES each
        let roll = faces[0] + faces[1];

        if new_round {
            self.round += 1;
        }
        self.cursor = index + 1;
        self.turns_taken += 1;

        let id = self.players[index].id();
        debug!(round = self.round, player = %id, roll, "turn");
        self.notify(|observer, game| observer.on_turn(game, roll));

        let knocked_out = roll == self.players[index].knockout_number();
        let mut outcome = None;

        if knocked_out {
            self.players[index].eliminate();
            info!(
                player = %id,
                knockout_number = roll,
                score = self.players[index].score(),
                "player knocked out"
            );
            if self.active_players() == 0 {
                outcome = Some(Outcome::AllKnockedOut);
            }
        } else if self.active_players() == 0 {
            // Checked before the roll is credited
            outcome = Some(Outcome::AllKnockedOut);
        } else {
            let player = &mut self.players[index];
            player.add_score(roll);
            if player.score() >= TARGET_SCORE {
                outcome = Some(Outcome::Winner {
                    player: id,
                    score: player.score(),
                });
            }
        }

        let turn = Turn {
            round: self.round,
            player: id,
            faces,
            roll,
            knocked_out,
            score: self.players[index].score(),
        };

        if let Some(outcome) = outcome {
            self.finish(outcome);
        }

        Ok(turn)
    }

    fn start(&mut self) {
        self.status = GameStatus::Running;
        self.round = 1;
        info!(players = self.players.len(), "knock out started");
        self.notify(|observer, game| observer.on_game_start(game));
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = GameStatus::Finished(outcome);
        match outcome {
            Outcome::Winner { player, score } => info!(
                player = %player,
                score,
                remaining = self.active_players(),
                "player won"
            ),
            Outcome::AllKnockedOut => info!("all players have been knocked out"),
        }
        self.notify(|observer, game| observer.on_game_end(game));
    }

    /// Find the next active seat at or after the cursor. The flag is set
    /// when the search wrapped past the end of the roster into a new round.
    fn next_active(&self) -> Option<(usize, bool)> {
        if let Some(offset) = self.players[self.cursor..]
            .iter()
            .position(Player::is_active)
        {
            return Some((self.cursor + offset, false));
        }

        self.players
            .iter()
            .position(Player::is_active)
            .map(|index| (index, true))
    }

    fn roll_pair(&mut self) -> Result<[u32; 2]> {
        Ok([self.die.roll()?, self.die.roll()?])
    }

    fn notify(&self, event: impl FnOnce(&mut dyn GameObserver, &dyn DiceGame)) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            event(&mut *observer.borrow_mut(), self);
        }
    }
}

impl DiceGame for KnockOut {
    fn name(&self) -> &str {
        "Knock Out!"
    }

    fn die(&self) -> &Die {
        &self.die
    }

    fn players(&self) -> &[Player] {
        &self.players
    }

    fn status(&self) -> GameStatus {
        self.status
    }
}

impl fmt::Debug for KnockOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnockOut")
            .field("die", &self.die)
            .field("players", &self.players)
            .field("status", &self.status)
            .field("round", &self.round)
            .field("turns_taken", &self.turns_taken)
            .field("aborted", &self.aborted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    fn player(id: u32, knockout_number: u32) -> Player {
        Player::with_knockout_number(PlayerId::new(id), knockout_number).unwrap()
    }

    fn scripted_die(values: Vec<u32>) -> Die {
        Die::new(STANDARD_SIDES, ScriptedSource::new(values)).unwrap()
    }

    #[test]
    fn test_zero_players_rejected() {
        let err = KnockOut::new(0, OneThroughTen::new(1)).unwrap_err();
        assert!(matches!(err, KnockOutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_game_creation() {
        let game = KnockOut::new(5, OneThroughTen::new(42)).unwrap();

        assert_eq!(game.players().len(), 5);
        assert_eq!(game.die().sides(), STANDARD_SIDES);
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.round(), 0);
        assert_eq!(game.active_players(), 5);

        let ids: Vec<_> = game.players().iter().map(Player::id).collect();
        assert_eq!(ids, PlayerId::all(5).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_config() {
        let config = KnockOutConfig::new().with_player_count(3).with_seed(9);
        let a = KnockOut::from_config(&config).unwrap();
        let b = KnockOut::from_config(&config).unwrap();
        assert_eq!(a.players(), b.players());
    }

    #[test]
    fn test_roster_validation() {
        let err = KnockOut::with_players(vec![], scripted_die(vec![])).unwrap_err();
        assert!(matches!(err, KnockOutError::InvalidConfiguration(_)));

        let err =
            KnockOut::with_players(vec![player(1, 6), player(1, 7)], scripted_die(vec![]))
                .unwrap_err();
        assert!(matches!(err, KnockOutError::InvalidConfiguration(_)));

        let mut out = player(1, 6);
        out.eliminate();
        let err = KnockOut::with_players(vec![out], scripted_die(vec![])).unwrap_err();
        assert!(matches!(err, KnockOutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_step_scores_roll() {
        // Faces 5 and 6
        let mut game = KnockOut::with_players(vec![player(1, 9)], scripted_die(vec![4, 5])).unwrap();

        let turn = game.step().unwrap();
        assert_eq!(
            turn,
            Turn {
                round: 1,
                player: PlayerId::new(1),
                faces: [5, 6],
                roll: 11,
                knocked_out: false,
                score: 11,
            }
        );
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.turns_taken(), 1);
    }

    #[test]
    fn test_eliminated_players_are_skipped() {
        // Player 1 rolls 3+3 into their knockout number, player 2 keeps rolling 1+1
        let die = scripted_die(vec![2, 2, 6, 6, 6, 6]);
        let mut game = KnockOut::with_players(vec![player(1, 6), player(2, 9)], die).unwrap();

        let first = game.step().unwrap();
        assert!(first.knocked_out);
        assert_eq!(first.player, PlayerId::new(1));

        let second = game.step().unwrap();
        assert_eq!(second.player, PlayerId::new(2));
        assert_eq!(second.round, 1);

        let third = game.step().unwrap();
        assert_eq!(third.player, PlayerId::new(2));
        assert_eq!(third.round, 2);
        assert_eq!(third.score, 4);
    }

    #[test]
    fn test_finished_game_rejects_play() {
        let mut game = KnockOut::with_players(vec![player(1, 6)], scripted_die(vec![2, 2])).unwrap();

        assert_eq!(game.play(), Ok(Outcome::AllKnockedOut));
        assert_eq!(game.step(), Err(KnockOutError::GameOver));
        assert_eq!(game.play(), Err(KnockOutError::GameOver));
    }

    #[test]
    fn test_source_failure_aborts() {
        let mut game = KnockOut::with_players(vec![player(1, 9)], scripted_die(vec![2, 2, 2])).unwrap();

        game.step().unwrap();
        assert!(matches!(
            game.step(),
            Err(KnockOutError::RandomSourceFailure(_))
        ));
        assert!(game.is_aborted());
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.turns_taken(), 1);

        assert_eq!(game.step(), Err(KnockOutError::Aborted));
        assert_eq!(game.play(), Err(KnockOutError::Aborted));
    }

    #[test]
    fn test_failed_roll_does_not_open_round() {
        // One turn in round 1, then the source runs dry on round 2's first roll
        let mut game = KnockOut::with_players(vec![player(1, 9)], scripted_die(vec![2, 2])).unwrap();

        assert_eq!(game.step().unwrap().round, 1);
        assert!(game.step().is_err());
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_oversized_die_rejected() {
        let die = Die::new(u32::MAX, ScriptedSource::cycle(vec![u32::MAX - 1])).unwrap();
        let err = KnockOut::with_players(vec![player(1, 9)], die).unwrap_err();
        assert!(matches!(err, KnockOutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_largest_die_sums_without_overflow() {
        // A draw of MAX_SIDES - 1 lands on the top face
        let die = Die::new(MAX_SIDES, ScriptedSource::cycle(vec![MAX_SIDES - 1])).unwrap();
        let mut game = KnockOut::with_players(vec![player(1, 9)], die).unwrap();

        let turn = game.step().unwrap();
        assert_eq!(turn.faces, [MAX_SIDES, MAX_SIDES]);
        assert_eq!(turn.roll, u32::MAX - 1);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Winner {
                player: PlayerId::new(1),
                score: u32::MAX - 1,
            })
        );
    }

    #[test]
    fn test_player_lookup() {
        let game = KnockOut::new(3, OneThroughTen::new(1)).unwrap();
        assert!(game.player(PlayerId::new(3)).is_some());
        assert!(game.player(PlayerId::new(4)).is_none());
    }
}
