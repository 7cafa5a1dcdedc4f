//! ISO 639-3 macrolanguage grouping and its reverse map.
//!
//! Statistical detectors often answer with an individual language code
//! (`cmn`, `pes`, `zsm`) that has no ISO 639-1 counterpart of its own. The
//! enclosing macrolanguage (`zho`, `fas`, `msa`) usually does, so the
//! normalizer looks the macrolanguage up when the direct mapping fails.

use std::collections::HashMap;

/// A macrolanguage and the individual languages it encompasses.
pub type MacrolanguageGroup = (&'static str, &'static [&'static str]);

/// ISO 639-3 macrolanguages, ordered by macrolanguage code.
pub static MACROLANGUAGES: &[MacrolanguageGroup] = &[
    ("aka", &["fat", "twi"]),
    (
        "ara",
        &[
            "aao", "abh", "abv", "acm", "acq", "acw", "acx", "acy", "adf", "aeb", "aec", "afb",
            "ajp", "apc", "apd", "arb", "arq", "ars", "ary", "arz", "auz", "avl", "ayh", "ayl",
            "ayn", "ayp", "pga", "shu", "ssh",
        ],
    ),
    ("aym", &["ayc", "ayr"]),
    ("aze", &["azb", "azj"]),
    ("bal", &["bcc", "bgn", "bgp"]),
    ("bik", &["bcl", "bhk", "bln", "bto", "cts", "fbl", "lbl", "rbl", "ubl"]),
    ("bnc", &["ebk", "lbk", "obk", "rbk", "vbk"]),
    ("bua", &["bxm", "bxr", "bxu"]),
    ("chm", &["mhr", "mrj"]),
    ("cre", &["crj", "crk", "crl", "crm", "csw", "cwd"]),
    ("del", &["umu", "unm"]),
    ("den", &["scs", "xsl"]),
    ("din", &["dib", "dik", "dip", "diw", "dks"]),
    ("doi", &["dgo", "xnr"]),
    ("est", &["ekk", "vro"]),
    ("fas", &["pes", "prs"]),
    ("ful", &["ffm", "fub", "fuc", "fue", "fuf", "fuh", "fui", "fuq", "fuv"]),
    ("gba", &["bdt", "gbp", "gbq", "gmm", "gso", "gya", "mdo"]),
    ("gon", &["esg", "gno", "wsg"]),
    ("grb", &["gbo", "gec", "grj", "grv", "gry"]),
    ("grn", &["gnw", "gug", "gui", "gun", "nhd"]),
    ("hai", &["hax", "hdn"]),
    ("hbs", &["bos", "cnr", "hrv", "srp"]),
    (
        "hmn",
        &[
            "cqd", "hea", "hma", "hmc", "hmd", "hme", "hmg", "hmh", "hmi", "hmj", "hml", "hmm",
            "hmp", "hmq", "hms", "hmw", "hmy", "hmz", "hnj", "hrm", "huj", "mmr", "muq", "mww",
            "sfm",
        ],
    ),
    ("iku", &["ike", "ikt"]),
    ("ipk", &["esi", "esk"]),
    ("jrb", &["aju", "jye", "yhd", "yud"]),
    ("kau", &["kby", "knc", "krt"]),
    ("kln", &["enb", "eyo", "niq", "oki", "pko", "sgc", "spy", "tec", "tuy"]),
    ("kok", &["gom", "knn"]),
    ("kom", &["koi", "kpv"]),
    ("kon", &["kng", "kwy", "ldi"]),
    ("kpe", &["gkp", "xpe"]),
    ("kur", &["ckb", "kmr", "sdh"]),
    ("lah", &["hnd", "hno", "jat", "phr", "pmu", "pnb", "skr", "xhe"]),
    ("lav", &["ltg", "lvs"]),
    ("luy", &["bxk", "ida", "lkb", "lko", "lks", "lri", "lrm", "lsm", "lto", "lts", "lwg", "nle", "nyd", "rag"]),
    ("man", &["emk", "mku", "mlq", "mnk", "msc", "mwk", "myq"]),
    (
        "mlg",
        &[
            "bhr", "bjq", "bmm", "bzc", "msh", "plt", "skg", "tdx", "tkg", "txy", "xmv", "xmw",
        ],
    ),
    ("mon", &["khk", "mvf"]),
    (
        "msa",
        &[
            "bjn", "btj", "bve", "bvu", "coa", "dup", "hji", "ind", "jak", "jax", "kvb", "kvr",
            "kxd", "lce", "lcf", "liw", "max", "meo", "mfa", "mfb", "min", "mqg", "msi", "mui",
            "orn", "ors", "pel", "pse", "tmw", "urk", "vkk", "vkt", "xmm", "zlm", "zmi", "zsm",
        ],
    ),
    ("mwr", &["dhd", "mtr", "mve", "rwr", "swv", "wry"]),
    ("nep", &["dty", "npi"]),
    ("nor", &["nno", "nob"]),
    ("oji", &["ciw", "ojb", "ojc", "ojg", "ojs", "ojw", "otw"]),
    ("ori", &["ory", "spv"]),
    ("orm", &["gax", "gaz", "hae", "orc"]),
    ("pus", &["pbt", "pbu", "pst"]),
    (
        "que",
        &[
            "cqu", "qub", "qud", "quf", "qug", "quh", "quk", "qul", "qup", "qur", "qus", "quw",
            "qux", "quy", "quz", "qva", "qvc", "qve", "qvh", "qvi", "qvj", "qvl", "qvm", "qvn",
            "qvo", "qvp", "qvs", "qvw", "qvz", "qwa", "qwc", "qwh", "qws", "qxa", "qxc", "qxh",
            "qxl", "qxn", "qxo", "qxp", "qxr", "qxt", "qxu", "qxw",
        ],
    ),
    ("raj", &["bgq", "gda", "gju", "hoj", "mup", "wbr"]),
    ("rom", &["rmc", "rmf", "rml", "rmn", "rmo", "rmw", "rmy"]),
    ("sqi", &["aae", "aat", "aln", "als"]),
    ("srd", &["sdc", "sdn", "src", "sro"]),
    ("swa", &["swc", "swh"]),
    ("syr", &["aii", "cld"]),
    ("tmh", &["taq", "thv", "thz", "ttq"]),
    ("uzb", &["uzn", "uzs"]),
    ("yid", &["ydd", "yih"]),
    (
        "zap",
        &[
            "zaa", "zab", "zac", "zad", "zae", "zaf", "zai", "zam", "zao", "zaq", "zar", "zas",
            "zat", "zav", "zaw", "zax", "zca", "zoo", "zpa", "zpb", "zpc", "zpd", "zpe", "zpf",
            "zpg", "zph", "zpi", "zpj", "zpk", "zpl", "zpm", "zpn", "zpo", "zpp", "zpq", "zpr",
            "zps", "zpt", "zpu", "zpv", "zpw", "zpx", "zpy", "zpz", "zsr", "zte", "ztg", "ztl",
            "ztm", "ztn", "ztp", "ztq", "zts", "ztt", "ztu", "ztx", "zty",
        ],
    ),
    (
        "zha",
        &[
            "ccx", "ccy", "zch", "zeh", "zgb", "zgm", "zgn", "zhd", "zhn", "zlj", "zln", "zlq",
            "zqe", "zyb", "zyg", "zyj", "zyn", "zzj",
        ],
    ),
    (
        "zho",
        &[
            "cdo", "cjy", "cmn", "cnp", "cpx", "csp", "czh", "czo", "gan", "hak", "hsn", "lzh",
            "mnp", "nan", "wuu", "yue",
        ],
    ),
    ("zza", &["diq", "kiu"]),
];

/// Reverse map from an individual language code to its macrolanguage.
#[derive(Debug, Clone, Default)]
pub struct MacrolanguageMap {
    macro_of: HashMap<&'static str, &'static str>,
}

impl MacrolanguageMap {
    /// Flatten a grouping table. A code listed under several macrolanguages
    /// resolves to the last one in table order.
    pub fn build(groups: &[MacrolanguageGroup]) -> Self {
        let mut macro_of = HashMap::new();
        for (macrolanguage, members) in groups {
            for member in members.iter() {
                macro_of.insert(*member, *macrolanguage);
            }
        }
        Self { macro_of }
    }

    /// Macrolanguage enclosing `code`, if `code` is an individual language.
    pub fn macrolanguage_of(&self, code: &str) -> Option<&'static str> {
        self.macro_of.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.macro_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macro_of.is_empty()
    }
}
