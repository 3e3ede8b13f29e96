//! Built-in pattern tables.
//!
//! Plain data: one ordered list of regex sources per category, a
//! catalog-wide false-positive list and three context-signal lists. The
//! tables are compiled by [`PatternCatalog`](super::catalog::PatternCatalog);
//! every pattern is matched case-insensitively with Unicode word semantics, so
//! Latin and Cyrillic entries live side by side.

use crate::models::{Category, PerCategory};

use super::catalog::{CatalogSpec, CategorySpec, ContextSpec};

/// Version of the built-in catalog. Bump on any table change.
pub const BUILTIN_CATALOG_VERSION: &str = "2.0.0";

const VIOLENCE: &[&str] = &[
    r"\bkill\w*",
    r"\bshoot\w*",
    r"\bshot\b",
    r"\bstab\w*",
    r"\bknife\b",
    r"\bgun\w*",
    r"\bpistol\b",
    r"\brifle\b",
    r"\bexplod\w*",
    r"\bblast\w*",
    r"\battack\w*",
    r"\bbeating\b",
    r"\bbeaten\b",
    r"\bbeats\b",
    r"\bcorpse\b",
    r"\bdead\b",
    r"\bmurder\w*",
    r"\bviolen\w*",
    r"\bdeaths?\b",
    r"\bterrorist\b",
    r"\bhostage\b",
    r"\brip(?:ped|s)? apart\b",
    r"\bthugs?\b",
    r"\bterror\b",
    r"\bfight(?:ing)?\b",
    r"\bbattle[sd]?\b",
    r"\bwar\b",
    r"\bexplosion\b",
    r"\bgrenade\b",
    r"\bубий\w*",
    r"\bубить\b",
    r"\bубил\w*",
    r"\bубива\w*",
    r"\bстреля\w*",
    r"\bвыстрел\w*",
    r"\bзастрел\w*",
    r"\bзарез\w*",
    r"\bнож\b",
    r"\bоруж\w+",
    r"\bпистолет\w*",
    r"\bвинтовк\w*",
    r"\bавтомат\w*",
    r"\bвзрыв\w*",
    r"\bатак\w*",
    r"\bнападе\w*",
    r"\bизбие\w*",
    r"\bтруп\w*",
    r"\bмертв\w*",
    r"\bпогиб\w*",
    r"\bнасилие\b",
    r"\bжесток\w*",
    r"\bтеррор\w*",
    r"\bзаложник\w*",
    r"\bбандит\w*",
    r"\bдрак\w*",
    r"\bбой\b",
    r"\bсраж\w*",
    r"\bвойна\b",
    r"\bбоев\w*",
    r"\bгранат\w*",
    r"\bбомб\w*",
];

// Short Russian stems are spelled out by case ending: a bare `ран\w*` or
// `кров\w*` also hits "раньше" (earlier) and "кровать" (bed).
const GORE: &[&str] = &[
    r"\bblood\b",
    r"\bbloody\b",
    r"\bbloodied\b",
    r"\bbleeding\b",
    r"\bcorpse\b",
    r"\bwounds?\b",
    r"\bscar\b",
    r"\binjur\w*",
    r"\bcrash\w*",
    r"\bburn\w*",
    r"\bguts\b",
    r"\bentrails\b",
    r"\bbrain\b",
    r"\bdead body\b",
    r"\bgore\b",
    r"\bmutilat\w*",
    r"\bкровь\b",
    r"\bкров[ьи]ю\b",
    r"\bкров(?:и|ям|ями|ях)\b",
    r"\bкровав\w*",
    r"\bкровоточ\w*",
    r"\bран(?:а|ы|у|ой|е|ам|ами|ах)\b",
    r"\bшрам\w*",
    r"\bувечь\w*",
    r"\bожог\w*",
    r"\bкишк\w*",
    r"\bвнутренност\w*",
    r"\bмозг(?:и|ов|у|ом|ах|ами)?\b",
    r"\bрасчленен\w*",
    r"\bизувеч\w*",
];

const SEX_ACT: &[&str] = &[
    r"\brape\b",
    r"\bsexual\b",
    r"\bintercourse\b",
    r"\bsex scene\b",
    r"\bmolest\b",
    r"\borgasm\b",
    r"\b(?:having|had|have|has) sex\b",
    r"\bsexually\b",
    r"\bbed\s+scene\b",
    r"\bsex\b",
    r"\bexplicit sex\b",
    r"\bизнасилов\w*",
    r"\bнасилов\w*",
    r"\bсексуальн\w*",
    r"\bполов\w+\s+акт\w*",
    r"\bинтимн\w*",
    r"\bоргазм\w*",
    r"\bзанимаются\s+сексом\b",
    r"\bзанимались\s+любовью\b",
    r"\bпостельн\w+\s+сцен\w*",
];

const NUDITY: &[&str] = &[
    r"\bbra\b",
    r"\bpant(?:y|ies)\b",
    r"\bunderwear\b",
    r"\bnaked\b",
    r"\bnude\b",
    r"\bnudity\b",
    r"\bundress\w*",
    r"\btopless\b",
    r"\bголый\b",
    r"\bголая\b",
    r"\bнаг(?:ой|ая|ое|ие|ого|ую|им|их|ими|ом|ота|оту|ишом)\b",
    r"\bобнаж\w*",
    r"\bбюстгальтер\w*",
    r"\bтрус(?:ы|ах|ами|ики|иках|ов)\b",
    r"\bбель[её]\b",
    r"\bраздева\w*",
    r"\bбез одежд\w*",
];

const PROFANITY: &[&str] = &[
    r"\bfuck(?:s|ed|er|ers|ing|in)?\b",
    r"\bshit(?:s|ty)?\b",
    r"\bmotherfucker\b",
    r"\bbitch(?:es)?\b",
    r"\basshole\b",
    r"\bdamn\b",
    r"\bhell\b",
    r"\bcrap\b",
    r"\bблядь\b",
    r"\bбля\b",
    r"\bсука\b",
    r"\bхуй\b",
    r"\bпизд\w*",
    r"\bебать\b",
    r"\bебал\w*",
    r"\bебан\w*",
    r"\bзаеб\w*",
    r"\bдерьм\w*",
    r"\bговн\w*",
    r"\bхер\w*",
    r"\bмудак\w*",
    r"\bсволоч\w*",
    r"\bтварь\b",
];

const DRUGS: &[&str] = &[
    r"\bdrugs?\b",
    r"\bheroin\b",
    r"\bcocaine\b",
    r"\bmarijuana\b",
    r"\bpills?\b",
    r"\bweed\b",
    r"\balcohol\b",
    r"\bdrunk\b",
    r"\bcigarettes?\b",
    r"\bsmok(?:e|ing)\b",
    r"\baddiction\b",
    r"\bнаркот\w*",
    r"\bгероин\w*",
    r"\bкокаин\w*",
    r"\bмарихуан\w*",
    r"\bтравк\w*",
    r"\bдопинг\w*",
    r"\bтаблетк\w*",
    r"\bпилюл\w*",
    r"\bалкогол\w*",
    r"\bспирт\w*",
    r"\bвыпив\w*",
    r"\bпьян\w*",
    r"\bсигарет\w*",
    r"\bкур(?:ит|ил|ят|ить|ение|ени[еяю])\w*",
    r"\bзависим\w*",
    r"\bнакур\w*",
];

const CHILD_RISK: &[&str] = &[
    r"\bchild(?:ren)?\b.*\b(?:danger|threat|harm|abuse|violen|peril|hurt)\w*",
    r"\bkids?\b.*\b(?:danger|threat|harm|abuse|violen|peril|hurt)\w*",
    r"\bminors?\b.*\b(?:danger|risk|threat|harm|abuse)\w*",
    r"\bchild endangerment\b",
    r"\bpedophil\w*",
    r"\bнесовершеннолетн\w*",
    r"\bреб[её]н(?:ок|ка|ку|ком)\b.*\b(?:опасност|угроз|насили|избие)\w*",
    r"\bдет(?:и|ей|ям|ьми|ях)\b.*\b(?:опасност|угроз|насили|избие)\w*",
    r"\bжестокое обращение с детьми\b",
];

const FALSE_POSITIVES: &[&str] = &[
    r"if (?:it|that|this) kills",
    r"(?:it|that|this)'ll kill",
    r"(?:it|that|this) (?:will|would) kill",
    r"\bgonna kill (?:it|time)\b",
    r"\byou(?:'re| are) killing me\b",
    r"make love",
    r"\b(?:opposite|same)[- ]sex\b",
    r"\bsex education\b",
    r"kill time",
    r"dressed to kill",
    r"killer instinct",
    r"lady killer",
    r"killing me softly",
    r"shoot the breeze",
    r"shoot for",
    r"shot in the dark",
    r"long shot",
    r"shot at",
    r"light[ -]?shot",
    r"fight (?:for|to see|to|for the)",
    r"fighting (?:for|against)",
    r"won the war",
    r"war (?:ration|time|era|years)",
    r"(?:world|civil|cold) war",
    r"battles? (?:with|against|for)",
    r"attack(?:ed|ing)? (?:the|a) problem",
    r"speed of light",
    r"explosion of",
    r"explod(?:e|ed|ing) (?:with|into)",
    r"fight back tears",
    r"fighting? (?:cancer|disease|illness)",
    r"dead serious",
    r"pool table",
    r"bank shot",
    r"\ba beat\b",
    r"as if.*\b(?:molest|rape|seduce|fondle)",
    r"about to.*\b(?:molest|rape|seduce|fondle)",
    r"were to.*\b(?:molest|rape|seduce)",
    r"would.*\b(?:molest|rape|seduce)",
    r"brain(?:storm|wave|power|dump|drain|dead|cell|teaser|wash|freeze)",
    r"brains? (?:are|is) (?:just|garbage|trash)",
    r"в курсе",
    r"курток",
    r"куртк\w",
    r"обритый наголо",
    r"наголо",
    r"таблетк\w+\s+(?:от|для|против)",
    r"болеутол\w+",
    r"кроват\w*",
    r"\bкров[ао](?:м|й|ю|е|и)?\b",
    r"мозгов(?:ой|ым|ого|ому|ая|ую)\s+(?:штурм|центр|атак|трест)",
    r"ран(?:ь|н)(?:ше|ий|яя|ее|его|им|ему)",
];

const CHILD_MENTIONS: &[&str] = &[
    r"\b(?:child(?:ren)?|kids?|sons?|daughters?|teen(?:s|aged?)?|boys?|girls?|minors?|toddlers?|bab(?:y|ies))\b",
    r"\b(?:реб[её]н(?:ок|ка|ку|ком)|дет(?:и|ей|ям|ьми|ях|ский|ская|ское|ские|ство|ства)|малыш\w*|сын\w{0,2}|доч(?:ь|ери|ерью|ка|ки)|подрост(?:ок|ка|ки|ков)|мальчик\w*|девочк\w*|несовершеннолетн\w*)\b",
];

const HEROIC: &[&str] = &[
    r"\b(?:hero(?:es|ic)?|superhero(?:es)?|villains?|batman|superman|spider-?man)\b",
    r"\bsave[sd]? the (?:day|world|city)\b",
    r"\brescu(?:e|es|ed|ing)\b",
    r"\b(?:геро(?:й|я|ю|ем|е|и|ев|ям|ями|ях)|супергеро\w*|злоде\w*)\b",
];

const INTENSIFIERS: &[&str] = &[
    r"\b(?:graphic(?:ally)?|explicit(?:ly)?|brutal(?:ly)?|extreme(?:ly)?|gruesome|savage(?:ly)?)\b",
    r"\b(?:зверск\w*|откровенн\w*|натуралистичн\w*|беспощадн\w*)\b",
];

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

fn category_patterns(category: Category) -> &'static [&'static str] {
    match category {
        Category::Violence => VIOLENCE,
        Category::Gore => GORE,
        Category::SexAct => SEX_ACT,
        Category::Nudity => NUDITY,
        Category::Profanity => PROFANITY,
        Category::Drugs => DRUGS,
        Category::ChildRisk => CHILD_RISK,
    }
}

/// The built-in catalog as data.
pub(super) fn builtin_spec() -> CatalogSpec {
    CatalogSpec {
        version: BUILTIN_CATALOG_VERSION.to_string(),
        categories: PerCategory::from_fn(|category| CategorySpec {
            critical: None,
            patterns: owned(category_patterns(category)),
        }),
        false_positives: owned(FALSE_POSITIVES),
        context: ContextSpec {
            child_mentions: owned(CHILD_MENTIONS),
            heroic: owned(HEROIC),
            intensifiers: owned(INTENSIFIERS),
        },
    }
}
