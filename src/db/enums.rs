use serde::{Deserialize, Serialize};

/// Declares a closed vocabulary: an enum plus its stored labels.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }
    };
}

vocabulary! {
    /// Musical categories a venue hosts or an artist plays.
    Genre {
        Alternative => "Alternative",
        Blues => "Blues",
        Classical => "Classical",
        Country => "Country",
        Electronic => "Electronic",
        Folk => "Folk",
        Funk => "Funk",
        HipHop => "Hip-Hop",
        HeavyMetal => "Heavy Metal",
        Instrumental => "Instrumental",
        Jazz => "Jazz",
        MusicalTheatre => "Musical Theatre",
        Pop => "Pop",
        Punk => "Punk",
        RhythmAndBlues => "R&B",
        Reggae => "Reggae",
        RockNRoll => "Rock n Roll",
        Soul => "Soul",
        Other => "Other",
    }
}

vocabulary! {
    /// US state codes accepted for venue and artist locations.
    UsState {
        Al => "AL", Ak => "AK", Az => "AZ", Ar => "AR", Ca => "CA",
        Co => "CO", Ct => "CT", De => "DE", Dc => "DC", Fl => "FL",
        Ga => "GA", Hi => "HI", Id => "ID", Il => "IL", In => "IN",
        Ia => "IA", Ks => "KS", Ky => "KY", La => "LA", Me => "ME",
        Mt => "MT", Ne => "NE", Nv => "NV", Nh => "NH", Nj => "NJ",
        Nm => "NM", Ny => "NY", Nc => "NC", Nd => "ND", Oh => "OH",
        Ok => "OK", Or => "OR", Md => "MD", Ma => "MA", Mi => "MI",
        Mn => "MN", Ms => "MS", Mo => "MO", Pa => "PA", Ri => "RI",
        Sc => "SC", Sd => "SD", Tn => "TN", Tx => "TX", Ut => "UT",
        Vt => "VT", Va => "VA", Wa => "WA", Wv => "WV", Wi => "WI",
        Wy => "WY",
    }
}
