use snake_engine::snake::InputAction;

pub fn decode_word(word: &str) -> Option<InputAction> {
    match word.to_ascii_lowercase().as_str() {
        "w" | "up" | "k" => Some(InputAction::MoveUp),
        "s" | "down" | "j" => Some(InputAction::MoveDown),
        "a" | "left" | "h" => Some(InputAction::MoveLeft),
        "d" | "right" | "l" => Some(InputAction::MoveRight),
        "p" | "space" | "pause" => Some(InputAction::Pause),
        "r" | "restart" => Some(InputAction::Restart),
        "q" | "esc" | "quit" => Some(InputAction::Quit),
        _ => None,
    }
}

/// A line may carry several commands, e.g. `w d`. Unknown words are skipped.
pub fn decode_line(line: &str) -> Vec<InputAction> {
    line.split_whitespace().filter_map(decode_word).collect()
}
