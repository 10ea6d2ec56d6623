//! Text shown to the player.

pub const HELP_MENU: &str = "\nCrossword Puzzler -- Press H at any time to bring up this menu\
    \nC n - Display n of the current puzzle's down and across clues\
    \nG i j A/D - Make a guess for the clue starting at row i, column j\
    \nR i j A/D - Reveal the answer for the clue starting at row i, column j\
    \nT i j A/D - Gives a hint (first wrong letter) for the clue starting at row i, column j\
    \nH - Display the menu\
    \nS - Restart the game\
    \nQ - Quit the program";

pub const OPTION_PROMPT: &str = "\nEnter option: ";
pub const PUZZLE_PROMPT: &str = "Enter the filename of the puzzle you want to play: ";
pub const PUZZLE_FILE_ERROR: &str = "No puzzle found with that filename. Try Again.\n";
pub const ENTER_GUESS: &str = "Enter your guess (use _ for blanks): ";
pub const INVALID_OPTION: &str = "Invalid option/arguments. Type 'H' for help.";
pub const ALREADY_CORRECT: &str = "This clue is already correct!";
pub const SOLVED: &str = "\nPuzzle solved! Congratulations!";
