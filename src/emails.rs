//! The e-mail excerpts the report scores, in print order.

/// One excerpt and how the report prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    /// Short name used in logs.
    pub name: &'static str,
    /// Message body, printed verbatim when [`echo`](Self::echo) is set.
    pub text: &'static str,
    /// Print the body before its scores.
    pub echo: bool,
    /// Print an empty line after the score line.
    pub blank_line_after: bool,
}

/// An e-mail about a stalled deal.
pub const FRUSTRATED: &str = r#"Like you, I am getting very frustrated with this process. I am genuinely trying to be as reasonable as possible. I am not trying to "hold up" the deal at the last minute. I'm afraid that I am being asked to take a fairly large leap of faith after this company (I don't mean the two of you -- I mean Enron) has screwed me and the people who work for me."#;

/// A one-line reply about staffing.
pub const CHALLENGE: &str =
    "Looks great.  I think we should have a least 1 or 2 real time traders in Calgary.";

/// A trading-desk memo on market positioning.
pub const SCOPE: &str = "It seems to me we are in the middle of no man's land with respect to the  following:  Opec production speculation, Mid east crisis and renewed  tensions, US elections and what looks like a slowing economy (?), and no real weather anywhere in the world. I think it would be most prudent to play  the markets from a very flat price position and try to day trade more aggressively. I have no intentions of outguessing Mr. Greenspan, the US. electorate, the Opec ministers and their new important roles, The Israeli and Palestinian leaders, and somewhat importantly, Mother Nature.  Given that, and that we cannot afford to lose any more money, and that Var seems to be a problem, let's be as flat as possible. I'm ok with spread risk  (not front to backs, but commodity spreads). The morning meetings are not inspiring, and I don't have a real feel for  everyone's passion with respect to the markets.  As such, I'd like to ask  John N. to run the morning meetings on Mon. and Wed.  Thanks. Jeff";

/// Every excerpt in the order the report prints them.
///
/// The challenge reply is scored without echoing its text.
pub const MESSAGES: [Message; 3] = [
    Message {
        name: "message",
        text: FRUSTRATED,
        echo: true,
        blank_line_after: true,
    },
    Message {
        name: "challenge",
        text: CHALLENGE,
        echo: false,
        blank_line_after: false,
    },
    Message {
        name: "scope",
        text: SCOPE,
        echo: true,
        blank_line_after: false,
    },
];
