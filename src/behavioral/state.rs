//! State: the player's buttons behave differently depending on whether it is
//! locked, ready or playing.

use tracing::debug;

const SEEK_SECONDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Locked,
    Ready,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Single,
    Double,
}

#[derive(Debug)]
pub struct AudioPlayer {
    state: PlayerState,
    playing: bool,
    playlist: Vec<String>,
    current: usize,
    position: u32,
    log: Vec<String>,
}

impl AudioPlayer {
    pub fn new<I, S>(playlist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: PlayerState::Ready,
            playing: false,
            playlist: playlist.into_iter().map(Into::into).collect(),
            current: 0,
            position: 0,
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_song(&self) -> Option<&str> {
        self.playlist.get(self.current).map(String::as_str)
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    fn change_state(&mut self, next: PlayerState) {
        debug!(from = ?self.state, to = ?next, "player state change");
        self.state = next;
    }

    pub fn click_lock(&mut self) {
        match self.state {
            PlayerState::Locked if self.playing => self.change_state(PlayerState::Playing),
            PlayerState::Locked => self.change_state(PlayerState::Ready),
            PlayerState::Ready | PlayerState::Playing => self.change_state(PlayerState::Locked),
        }
    }

    pub fn click_play(&mut self) {
        match self.state {
            PlayerState::Locked => self.ignored("play"),
            PlayerState::Ready => {
                self.start_playback();
                self.change_state(PlayerState::Playing);
            }
            PlayerState::Playing => {
                self.stop_playback();
                self.change_state(PlayerState::Ready);
            }
        }
    }

    pub fn click_next(&mut self, click: Click) {
        match (self.state, click) {
            (PlayerState::Locked, _) => self.ignored("next"),
            (PlayerState::Ready, _) | (PlayerState::Playing, Click::Double) => self.next_song(),
            (PlayerState::Playing, Click::Single) => self.fast_forward(SEEK_SECONDS),
        }
    }

    pub fn click_previous(&mut self, click: Click) {
        match (self.state, click) {
            (PlayerState::Locked, _) => self.ignored("previous"),
            (PlayerState::Ready, _) | (PlayerState::Playing, Click::Double) => self.previous_song(),
            (PlayerState::Playing, Click::Single) => self.rewind(SEEK_SECONDS),
        }
    }

    fn ignored(&mut self, button: &str) {
        self.log.push(format!("{button} ignored while locked"));
    }

    fn start_playback(&mut self) {
        self.playing = true;
        let song = self.current_song().unwrap_or("<empty playlist>").to_string();
        self.log.push(format!("playing {song}"));
    }

    fn stop_playback(&mut self) {
        self.playing = false;
        self.log.push(format!("stopped at {}s", self.position));
    }

    fn next_song(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.playlist.len();
        self.position = 0;
        self.log.push(format!("next song: {}", self.playlist[self.current]));
    }

    fn previous_song(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.current = (self.current + self.playlist.len() - 1) % self.playlist.len();
        self.position = 0;
        self.log.push(format!("previous song: {}", self.playlist[self.current]));
    }

    fn fast_forward(&mut self, seconds: u32) {
        self.position += seconds;
        self.log.push(format!("fast forward to {}s", self.position));
    }

    fn rewind(&mut self, seconds: u32) {
        self.position = self.position.saturating_sub(seconds);
        self.log.push(format!("rewind to {}s", self.position));
    }
}

pub fn demo() -> Vec<String> {
    let mut player = AudioPlayer::new(["Intro", "Verse", "Outro"]);
    player.click_play();
    player.click_next(Click::Single);
    player.click_next(Click::Single);
    player.click_previous(Click::Single);
    player.click_lock();
    player.click_next(Click::Double);
    player.click_lock();
    player.click_next(Click::Double);
    player.click_play();

    let mut lines = player.log().to_vec();
    lines.push(format!("final state: {:?}", player.state()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_ready() {
        let player = AudioPlayer::new(["a"]);
        assert_eq!(player.state(), PlayerState::Ready);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_play_toggles_between_ready_and_playing() {
        let mut player = AudioPlayer::new(["a"]);
        player.click_play();
        assert_eq!(player.state(), PlayerState::Playing);
        assert!(player.is_playing());
        player.click_play();
        assert_eq!(player.state(), PlayerState::Ready);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_unlock_returns_to_playing_when_music_was_on() {
        let mut player = AudioPlayer::new(["a"]);
        player.click_play();
        player.click_lock();
        assert_eq!(player.state(), PlayerState::Locked);
        player.click_lock();
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_unlock_returns_to_ready_when_stopped() {
        let mut player = AudioPlayer::new(["a"]);
        player.click_lock();
        player.click_lock();
        assert_eq!(player.state(), PlayerState::Ready);
    }

    #[test]
    fn test_locked_ignores_buttons() {
        let mut player = AudioPlayer::new(["a", "b"]);
        player.click_lock();
        player.click_play();
        player.click_next(Click::Double);
        player.click_previous(Click::Single);
        assert_eq!(player.current_song(), Some("a"));
        assert!(!player.is_playing());
        assert_eq!(player.log().len(), 3);
    }

    #[test]
    fn test_playing_single_click_seeks_double_click_skips() {
        let mut player = AudioPlayer::new(["a", "b", "c"]);
        player.click_play();
        player.click_next(Click::Single);
        player.click_next(Click::Single);
        assert_eq!(player.position(), 10);
        player.click_previous(Click::Single);
        assert_eq!(player.position(), 5);
        player.click_previous(Click::Single);
        player.click_previous(Click::Single);
        assert_eq!(player.position(), 0);

        player.click_next(Click::Double);
        assert_eq!(player.current_song(), Some("b"));
        player.click_previous(Click::Double);
        player.click_previous(Click::Double);
        assert_eq!(player.current_song(), Some("c"));
    }

    #[test]
    fn test_ready_next_changes_song_regardless_of_click() {
        let mut player = AudioPlayer::new(["a", "b"]);
        player.click_next(Click::Single);
        assert_eq!(player.current_song(), Some("b"));
        player.click_next(Click::Single);
        assert_eq!(player.current_song(), Some("a"));
    }

    #[test]
    fn test_empty_playlist() {
        let mut player = AudioPlayer::new(Vec::<String>::new());
        player.click_next(Click::Single);
        player.click_play();
        assert_eq!(player.current_song(), None);
        assert!(player.log()[0].contains("empty"));
    }

    #[test]
    fn test_demo_ends_ready() {
        let lines = demo();
        assert_eq!(lines.last().unwrap(), "final state: Ready");
    }
}
