/// The kana rows a godan verb inflects through.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Godan {
    /// The dictionary ending.
    pub(super) u: char,
    /// The あ段 kana, used for negatives.
    pub(super) a: &'static str,
    /// The え段 kana, used for hypotheticals.
    pub(super) e: &'static str,
}

/// The U godan table.
pub(super) static U: &Godan = &Godan {
    u: 'う',
    a: "わ",
    e: "え",
};

/// The TSU godan table.
pub(super) static TSU: &Godan = &Godan {
    u: 'つ',
    a: "た",
    e: "て",
};

/// The RU godan table.
pub(super) static RU: &Godan = &Godan {
    u: 'る',
    a: "ら",
    e: "れ",
};

/// The KU godan table.
pub(super) static KU: &Godan = &Godan {
    u: 'く',
    a: "か",
    e: "け",
};

/// The GU godan table.
pub(super) static GU: &Godan = &Godan {
    u: 'ぐ',
    a: "が",
    e: "げ",
};

/// The SU godan table.
pub(super) static SU: &Godan = &Godan {
    u: 'す',
    a: "さ",
    e: "せ",
};

/// The MU godan table.
pub(super) static MU: &Godan = &Godan {
    u: 'む',
    a: "ま",
    e: "め",
};

/// The BU godan table.
pub(super) static BU: &Godan = &Godan {
    u: 'ぶ',
    a: "ば",
    e: "べ",
};

/// The NU godan table.
pub(super) static NU: &Godan = &Godan {
    u: 'ぬ',
    a: "な",
    e: "ね",
};
