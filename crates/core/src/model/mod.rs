mod ids;
mod profile;
mod question;
mod roadmap;
mod stream;
mod tally;

pub use ids::{MilestoneId, QuestionId};

pub use profile::StreamProfile;
pub use question::{OPTION_COUNT, OptionIndex, OptionIndexError, Question};
pub use roadmap::{Milestone, Roadmap};
pub use stream::{Stream, StreamError};
pub use tally::StreamTally;
