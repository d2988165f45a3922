mod team;
pub use self::team::{Team, TeamKey};

mod event;
pub use self::event::{Event, EventKey};

mod matches;
pub use self::matches::{Alliance, AllianceColor, Alliances, Match};
