//! Embedded valence tables for the rule-based scorer.
//!
//! Valences use the [-4, 4] scale. Inflected forms are listed explicitly; there is no stemming.

/// Word valences: general polarity vocabulary plus market and crypto terms.
pub(crate) const VALENCES: &[(&str, f64)] = &[
    // general positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("happy", 2.7),
    ("love", 3.2),
    ("like", 1.5),
    ("nice", 1.8),
    ("win", 2.8),
    ("wins", 2.7),
    ("won", 2.7),
    ("winning", 2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("hope", 1.9),
    ("hopes", 1.6),
    ("hopeful", 1.6),
    ("optimism", 2.5),
    ("optimistic", 1.3),
    ("confident", 2.2),
    ("confidence", 2.3),
    ("positive", 2.6),
    ("strong", 2.3),
    ("stronger", 1.6),
    ("strength", 2.2),
    ("secure", 1.4),
    ("safe", 1.9),
    ("safety", 1.8),
    ("support", 1.7),
    ("supports", 1.5),
    ("approve", 2.0),
    ("approves", 1.7),
    ("approved", 1.8),
    ("approval", 2.2),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("opportunity", 1.8),
    ("opportunities", 1.6),
    ("innovation", 1.6),
    ("innovative", 1.9),
    ("boost", 1.7),
    ("boosts", 1.3),
    ("boosted", 1.5),
    ("growth", 1.6),
    ("grow", 1.4),
    ("grows", 1.3),
    ("growing", 1.4),
    ("gain", 2.4),
    ("gains", 1.8),
    ("gained", 1.6),
    ("profit", 1.9),
    ("profits", 1.9),
    ("profitable", 1.9),
    ("rich", 2.6),
    ("wealth", 2.2),
    ("celebrate", 2.7),
    ("celebrates", 2.1),
    ("record", 1.2),
    ("milestone", 1.8),
    ("improve", 1.9),
    ("improves", 1.8),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("recover", 1.7),
    ("recovers", 1.5),
    ("recovery", 1.4),
    ("rebound", 1.5),
    ("rebounds", 1.5),
    ("welcome", 2.0),
    ("welcomes", 1.7),
    ("trust", 2.3),
    ("fair", 1.3),
    ("free", 2.3),
    ("easy", 1.9),
    ("clear", 1.6),
    ("stable", 1.2),
    ("stability", 1.8),
    ("upgrade", 1.7),
    ("upgrades", 1.5),
    ("upgraded", 1.5),
    ("adopt", 1.4),
    ("adoption", 1.5),
    ("partnership", 1.6),
    ("breakthrough", 2.6),
    ("thrive", 2.4),
    ("thrives", 2.2),
    ("resilient", 1.7),
    ("robust", 1.9),
    ("praise", 2.6),
    ("interest", 1.0),
    ("interesting", 1.7),
    ("top", 0.8),
    // market positive
    ("bullish", 2.4),
    ("bull", 1.3),
    ("bulls", 1.3),
    ("rally", 1.9),
    ("rallies", 1.8),
    ("rallied", 1.8),
    ("rallying", 1.8),
    ("surge", 1.8),
    ("surges", 1.8),
    ("surged", 1.8),
    ("surging", 1.8),
    ("soar", 2.3),
    ("soars", 2.3),
    ("soared", 2.3),
    ("soaring", 2.3),
    ("jump", 1.2),
    ("jumps", 1.2),
    ("jumped", 1.2),
    ("climb", 1.2),
    ("climbs", 1.2),
    ("climbed", 1.2),
    ("rise", 1.1),
    ("rises", 1.1),
    ("rising", 1.1),
    ("rose", 1.1),
    ("skyrocket", 2.4),
    ("skyrockets", 2.4),
    ("outperform", 2.0),
    ("outperforms", 2.0),
    ("beat", 0.9),
    ("beats", 0.9),
    ("breakout", 1.6),
    ("moon", 1.5),
    ("mooning", 1.8),
    ("uptrend", 1.6),
    ("highs", 1.1),
    ("inflows", 1.3),
    ("accumulation", 1.0),
    ("buy", 0.9),
    ("buying", 0.8),
    ("hodl", 1.0),
    // general negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("hate", -2.7),
    ("sad", -2.1),
    ("angry", -2.3),
    ("fear", -2.2),
    ("fears", -1.8),
    ("afraid", -1.9),
    ("panic", -2.3),
    ("panics", -1.9),
    ("worry", -1.9),
    ("worries", -1.8),
    ("worried", -1.2),
    ("concern", -1.3),
    ("concerns", -1.3),
    ("concerned", -1.3),
    ("risk", -1.1),
    ("risks", -1.1),
    ("risky", -1.4),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("threat", -2.4),
    ("threats", -1.8),
    ("threaten", -1.6),
    ("threatens", -1.6),
    ("warn", -0.4),
    ("warns", -0.4),
    ("warning", -1.4),
    ("fail", -2.5),
    ("fails", -1.8),
    ("failed", -2.3),
    ("failure", -2.3),
    ("lose", -1.7),
    ("loses", -1.3),
    ("losing", -1.6),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lost", -1.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("trouble", -1.7),
    ("crisis", -3.1),
    ("chaos", -2.7),
    ("collapse", -2.2),
    ("collapses", -2.2),
    ("collapsed", -1.8),
    ("scam", -2.7),
    ("scams", -2.8),
    ("fraud", -2.8),
    ("hack", -1.3),
    ("hacked", -1.7),
    ("hackers", -1.2),
    ("exploit", -1.5),
    ("exploited", -1.6),
    ("theft", -2.5),
    ("stolen", -2.2),
    ("steal", -2.2),
    ("attack", -2.1),
    ("attacks", -1.9),
    ("lawsuit", -0.9),
    ("sue", -1.1),
    ("sues", -1.2),
    ("sued", -1.1),
    ("ban", -2.6),
    ("bans", -2.6),
    ("banned", -2.0),
    ("crackdown", -1.9),
    ("fine", 0.8),
    ("fined", -1.5),
    ("penalty", -2.0),
    ("arrest", -1.4),
    ("arrested", -2.1),
    ("guilty", -1.8),
    ("illegal", -2.6),
    ("weak", -1.9),
    ("weaker", -1.9),
    ("weakness", -1.6),
    ("uncertain", -1.2),
    ("uncertainty", -1.4),
    ("doubt", -1.5),
    ("doubts", -1.2),
    ("negative", -2.7),
    ("pessimism", -1.5),
    ("pessimistic", -1.5),
    ("disappoint", -1.7),
    ("disappointing", -2.2),
    ("disappointed", -1.9),
    ("miss", -0.6),
    ("misses", -0.9),
    ("missed", -1.2),
    ("downgrade", -1.5),
    ("downgrades", -1.5),
    ("downgraded", -1.5),
    ("volatile", -1.2),
    ("volatility", -0.9),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.6),
    ("insolvent", -2.3),
    ("layoffs", -1.8),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("reject", -1.7),
    ("rejects", -1.7),
    ("rejected", -2.0),
    ("kill", -3.7),
    ("killed", -3.5),
    ("dead", -3.3),
    ("death", -2.9),
    ("war", -2.9),
    ("recession", -2.3),
    ("inflation", -0.9),
    ("debt", -1.5),
    ("default", -0.9),
    // market negative
    ("bearish", -2.4),
    ("bear", -1.2),
    ("bears", -1.2),
    ("crash", -2.7),
    ("crashes", -2.6),
    ("crashed", -2.6),
    ("crashing", -2.6),
    ("plunge", -2.3),
    ("plunges", -2.3),
    ("plunged", -2.3),
    ("plunging", -2.3),
    ("plummet", -2.3),
    ("plummets", -2.3),
    ("plummeted", -2.3),
    ("tumble", -1.6),
    ("tumbles", -1.6),
    ("tumbled", -1.6),
    ("slump", -1.9),
    ("slumps", -1.9),
    ("slumped", -1.9),
    ("sink", -1.4),
    ("sinks", -1.4),
    ("sank", -1.4),
    ("drop", -1.1),
    ("drops", -1.1),
    ("dropped", -1.1),
    ("fall", -1.0),
    ("falls", -1.0),
    ("fell", -1.0),
    ("falling", -1.1),
    ("decline", -1.4),
    ("declines", -1.4),
    ("declined", -1.4),
    ("dip", -0.9),
    ("dips", -0.9),
    ("slide", -1.2),
    ("slides", -1.2),
    ("selloff", -1.9),
    ("sell-off", -1.9),
    ("liquidation", -1.8),
    ("liquidations", -1.8),
    ("liquidated", -1.9),
    ("dump", -1.6),
    ("dumps", -1.6),
    ("dumping", -1.6),
    ("outflows", -1.3),
    ("downtrend", -1.6),
    ("lows", -1.1),
    ("underperform", -1.8),
    ("rugpull", -3.0),
    ("rug", -0.4),
    ("depeg", -2.2),
    ("bubble", -1.2),
    ("sell", -0.7),
    ("selling", -0.7),
];

/// Intensity modifiers: positive values boost, negative values dampen.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("massively", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("sharply", B_INCR),
    ("significantly", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
];

/// Words that flip the polarity of a following sentiment word.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt",
    "hasn't", "havent", "haven't", "isnt", "isn't", "neither", "never", "no", "nobody",
    "none", "nope", "nor", "not", "nothing", "nowhere", "shouldnt", "shouldn't", "wasnt",
    "wasn't", "werent", "weren't", "without", "wont", "won't", "wouldnt", "wouldn't",
];

/// Scalar added by an intensifying booster.
pub(crate) const B_INCR: f64 = 0.293;
/// Scalar added by a dampening booster.
pub(crate) const B_DECR: f64 = -0.293;
/// Extra valence for an ALL-CAPS sentiment word in mixed-case text.
pub(crate) const C_INCR: f64 = 0.733;
/// Multiplier applied by a negation in the preceding window.
pub(crate) const N_SCALAR: f64 = -0.74;
