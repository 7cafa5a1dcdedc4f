//! Reference language table.
//!
//! Ordered (code, display name) pairs. Regional variants follow their base
//! language, and a handful of codes appear more than once. Order matters: the
//! index keeps the first entry it sees for each base code.

use crate::i18n::LanguageEntry;

pub static LANG_CODE: &[LanguageEntry] = &[
    LanguageEntry::new("af", "Afrikaans"),
    LanguageEntry::new("af-ZA", "Afrikaans (South Africa)"),
    LanguageEntry::new("sq", "Albanian"),
    LanguageEntry::new("sq-AL", "Albanian (Albania)"),
    LanguageEntry::new("am", "Amharic"),
    LanguageEntry::new("ar", "Arabic"),
    LanguageEntry::new("ar-DZ", "Arabic (Algeria)"),
    LanguageEntry::new("ar-BH", "Arabic (Bahrain)"),
    LanguageEntry::new("ar-EG", "Arabic (Egypt)"),
    LanguageEntry::new("ar-IQ", "Arabic (Iraq)"),
    LanguageEntry::new("ar-JO", "Arabic (Jordan)"),
    LanguageEntry::new("ar-KW", "Arabic (Kuwait)"),
    LanguageEntry::new("ar-LB", "Arabic (Lebanon)"),
    LanguageEntry::new("ar-LY", "Arabic (Libya)"),
    LanguageEntry::new("ar-MA", "Arabic (Morocco)"),
    LanguageEntry::new("ar-OM", "Arabic (Oman)"),
    LanguageEntry::new("ar-QA", "Arabic (Qatar)"),
    LanguageEntry::new("ar-SA", "Arabic (Saudi Arabia)"),
    LanguageEntry::new("ar-SY", "Arabic (Syria)"),
    LanguageEntry::new("ar-TN", "Arabic (Tunisia)"),
    LanguageEntry::new("ar-AE", "Arabic (U.A.E.)"),
    LanguageEntry::new("ar-YE", "Arabic (Yemen)"),
    LanguageEntry::new("hy", "Armenian"),
    LanguageEntry::new("hy-AM", "Armenian (Armenia)"),
    LanguageEntry::new("as", "Assamese"),
    LanguageEntry::new("ay", "Aymara"),
    LanguageEntry::new("az-AZ", "Azeri (Cyrillic) (Azerbaijan)"),
    LanguageEntry::new("az", "Azeri (Latin)"),
    LanguageEntry::new("az-AZ", "Azeri (Latin) (Azerbaijan)"),
    LanguageEntry::new("bm", "Bambara"),
    LanguageEntry::new("eu", "Basque"),
    LanguageEntry::new("eu-ES", "Basque (Spain)"),
    LanguageEntry::new("be", "Belarusian"),
    LanguageEntry::new("be-BY", "Belarusian (Belarus)"),
    LanguageEntry::new("bn", "Bengali"),
    LanguageEntry::new("bho", "Bhojpuri"),
    LanguageEntry::new("bs", "Bosnian"),
    LanguageEntry::new("bs-BA", "Bosnian (Bosnia and Herzegovina)"),
    LanguageEntry::new("bg", "Bulgarian"),
    LanguageEntry::new("bg-BG", "Bulgarian (Bulgaria)"),
    LanguageEntry::new("ca", "Catalan"),
    LanguageEntry::new("ca-ES", "Catalan (Spain)"),
    LanguageEntry::new("ceb", "Cebuano"),
    LanguageEntry::new("ny", "Chichewa"),
    LanguageEntry::new("zh", "Chinese"),
    LanguageEntry::new("zh-HK", "Chinese (Hong Kong)"),
    LanguageEntry::new("zh-MO", "Chinese (Macau)"),
    LanguageEntry::new("zh-CN", "Chinese (S)"),
    LanguageEntry::new("zh-SG", "Chinese (Singapore)"),
    LanguageEntry::new("zh-TW", "Chinese (T)"),
    LanguageEntry::new("co", "Corsican"),
    LanguageEntry::new("hr", "Croatian"),
    LanguageEntry::new("hr-BA", "Croatian (Bosnia and Herzegovina)"),
    LanguageEntry::new("hr-HR", "Croatian (Croatia)"),
    LanguageEntry::new("cs", "Czech"),
    LanguageEntry::new("cs-CZ", "Czech (Czech Republic)"),
    LanguageEntry::new("da", "Danish"),
    LanguageEntry::new("da-DK", "Danish (Denmark)"),
    LanguageEntry::new("dv", "Divehi"),
    LanguageEntry::new("dv-MV", "Divehi (Maldives)"),
    LanguageEntry::new("doi", "Dogri"),
    LanguageEntry::new("nl", "Dutch"),
    LanguageEntry::new("nl-BE", "Dutch (Belgium)"),
    LanguageEntry::new("nl-NL", "Dutch (Netherlands)"),
    LanguageEntry::new("en", "English"),
    LanguageEntry::new("en-AU", "English (Australia)"),
    LanguageEntry::new("en-BZ", "English (Belize)"),
    LanguageEntry::new("en-CA", "English (Canada)"),
    LanguageEntry::new("en-CB", "English (Caribbean)"),
    LanguageEntry::new("en-IE", "English (Ireland)"),
    LanguageEntry::new("en-JM", "English (Jamaica)"),
    LanguageEntry::new("en-NZ", "English (New Zealand)"),
    LanguageEntry::new("en-PH", "English (Republic of the Philippines)"),
    LanguageEntry::new("en-ZA", "English (South Africa)"),
    LanguageEntry::new("en-TT", "English (Trinidad and Tobago)"),
    LanguageEntry::new("en-GB", "English (United Kingdom)"),
    LanguageEntry::new("en-US", "English (United States)"),
    LanguageEntry::new("en-ZW", "English (Zimbabwe)"),
    LanguageEntry::new("eo", "Esperanto"),
    LanguageEntry::new("et", "Estonian"),
    LanguageEntry::new("et-EE", "Estonian (Estonia)"),
    LanguageEntry::new("ee", "Ewe"),
    LanguageEntry::new("fo", "Faroese"),
    LanguageEntry::new("fo-FO", "Faroese (Faroe Islands)"),
    LanguageEntry::new("fa", "Farsi"),
    LanguageEntry::new("fa-IR", "Farsi (Iran)"),
    LanguageEntry::new("fi", "Finnish"),
    LanguageEntry::new("fi-FI", "Finnish (Finland)"),
    LanguageEntry::new("fr", "French"),
    LanguageEntry::new("fr-BE", "French (Belgium)"),
    LanguageEntry::new("fr-CA", "French (Canada)"),
    LanguageEntry::new("fr-FR", "French (France)"),
    LanguageEntry::new("fr-LU", "French (Luxembourg)"),
    LanguageEntry::new("fr-MC", "French (Principality of Monaco)"),
    LanguageEntry::new("fr-CH", "French (Switzerland)"),
    LanguageEntry::new("fy", "Frisian"),
    LanguageEntry::new("mk", "FYRO Macedonian"),
    LanguageEntry::new("mk-MK", "FYRO Macedonian (Former Yugoslav Republic of Macedonia)"),
    LanguageEntry::new("gl", "Galician"),
    LanguageEntry::new("gl-ES", "Galician (Spain)"),
    LanguageEntry::new("ka", "Georgian"),
    LanguageEntry::new("ka-GE", "Georgian (Georgia)"),
    LanguageEntry::new("de", "German"),
    LanguageEntry::new("de-AT", "German (Austria)"),
    LanguageEntry::new("de-DE", "German (Germany)"),
    LanguageEntry::new("de-LI", "German (Liechtenstein)"),
    LanguageEntry::new("de-LU", "German (Luxembourg)"),
    LanguageEntry::new("de-CH", "German (Switzerland)"),
    LanguageEntry::new("el", "Greek"),
    LanguageEntry::new("el-GR", "Greek (Greece)"),
    LanguageEntry::new("gn", "Guarani"),
    LanguageEntry::new("gu", "Gujarati"),
    LanguageEntry::new("gu-IN", "Gujarati (India)"),
    LanguageEntry::new("ht", "Haitian Creole"),
    LanguageEntry::new("ha", "Hausa"),
    LanguageEntry::new("haw", "Hawaiian"),
    LanguageEntry::new("he", "Hebrew"),
    LanguageEntry::new("iw", "Hebrew"),
    LanguageEntry::new("he-IL", "Hebrew (Israel)"),
    LanguageEntry::new("hi", "Hindi"),
    LanguageEntry::new("hi-IN", "Hindi (India)"),
    LanguageEntry::new("hmn", "Hmong"),
    LanguageEntry::new("hu", "Hungarian"),
    LanguageEntry::new("hu-HU", "Hungarian (Hungary)"),
    LanguageEntry::new("is", "Icelandic"),
    LanguageEntry::new("is-IS", "Icelandic (Iceland)"),
    LanguageEntry::new("ig", "Igbo"),
    LanguageEntry::new("ilo", "Ilocano"),
    LanguageEntry::new("id", "Indonesian"),
    LanguageEntry::new("id-ID", "Indonesian (Indonesia)"),
    LanguageEntry::new("ga", "Irish"),
    LanguageEntry::new("it", "Italian"),
    LanguageEntry::new("it-IT", "Italian (Italy)"),
    LanguageEntry::new("it-CH", "Italian (Switzerland)"),
    LanguageEntry::new("ja", "Japanese"),
    LanguageEntry::new("ja-JP", "Japanese (Japan)"),
    LanguageEntry::new("jw", "Javanese"),
    LanguageEntry::new("kn", "Kannada"),
    LanguageEntry::new("kn-IN", "Kannada (India)"),
    LanguageEntry::new("kk", "Kazakh"),
    LanguageEntry::new("kk-KZ", "Kazakh (Kazakhstan)"),
    LanguageEntry::new("km", "Khmer"),
    LanguageEntry::new("rw", "Kinyarwanda"),
    LanguageEntry::new("kok", "Konkani"),
    LanguageEntry::new("gom", "Konkani"),
    LanguageEntry::new("kok-IN", "Konkani (India)"),
    LanguageEntry::new("ko", "Korean"),
    LanguageEntry::new("ko-KR", "Korean (Korea)"),
    LanguageEntry::new("kri", "Krio"),
    LanguageEntry::new("ku", "Kurdish (Kurmanji)"),
    LanguageEntry::new("ckb", "Kurdish (Sorani)"),
    LanguageEntry::new("ky", "Kyrgyz"),
    LanguageEntry::new("ky-KG", "Kyrgyz (Kyrgyzstan)"),
    LanguageEntry::new("lo", "Lao"),
    LanguageEntry::new("la", "Latin"),
    LanguageEntry::new("lv", "Latvian"),
    LanguageEntry::new("lv-LV", "Latvian (Latvia)"),
    LanguageEntry::new("ln", "Lingala"),
    LanguageEntry::new("lt", "Lithuanian"),
    LanguageEntry::new("lt-LT", "Lithuanian (Lithuania)"),
    LanguageEntry::new("lg", "Luganda"),
    LanguageEntry::new("lb", "Luxembourgish"),
    LanguageEntry::new("mai", "Maithili"),
    LanguageEntry::new("mg", "Malagasy"),
    LanguageEntry::new("ms", "Malay"),
    LanguageEntry::new("ms-BN", "Malay (Brunei Darussalam)"),
    LanguageEntry::new("ms-MY", "Malay (Malaysia)"),
    LanguageEntry::new("ml", "Malayalam"),
    LanguageEntry::new("mt", "Maltese"),
    LanguageEntry::new("mt-MT", "Maltese (Malta)"),
    LanguageEntry::new("mi", "Maori"),
    LanguageEntry::new("mi-NZ", "Maori (New Zealand)"),
    LanguageEntry::new("mr", "Marathi"),
    LanguageEntry::new("mr-IN", "Marathi (India)"),
    LanguageEntry::new("mni-Mtei", "Meiteilon (Manipuri)"),
    LanguageEntry::new("lus", "Mizo"),
    LanguageEntry::new("mn", "Mongolian"),
    LanguageEntry::new("mn-MN", "Mongolian (Mongolia)"),
    LanguageEntry::new("my", "Myanmar (Burmese)"),
    LanguageEntry::new("ne", "Nepali"),
    LanguageEntry::new("ns", "Northern Sotho"),
    LanguageEntry::new("ns-ZA", "Northern Sotho (South Africa)"),
    LanguageEntry::new("no", "Norwegian"),
    LanguageEntry::new("nb", "Norwegian (Bokm?l)"),
    LanguageEntry::new("nb-NO", "Norwegian (Bokm?l) (Norway)"),
    LanguageEntry::new("nn-NO", "Norwegian (Nynorsk) (Norway)"),
    LanguageEntry::new("or", "Odia (Oriya)"),
    LanguageEntry::new("om", "Oromo"),
    LanguageEntry::new("ps", "Pashto"),
    LanguageEntry::new("ps-AR", "Pashto (Afghanistan)"),
    LanguageEntry::new("pl", "Polish"),
    LanguageEntry::new("pl-PL", "Polish (Poland)"),
    LanguageEntry::new("pt", "Portuguese"),
    LanguageEntry::new("pt-BR", "Portuguese (Brazil)"),
    LanguageEntry::new("pt-PT", "Portuguese (Portugal)"),
    LanguageEntry::new("pa", "Punjabi"),
    LanguageEntry::new("pa-IN", "Punjabi (India)"),
    LanguageEntry::new("qu", "Quechua"),
    LanguageEntry::new("qu-BO", "Quechua (Bolivia)"),
    LanguageEntry::new("qu-EC", "Quechua (Ecuador)"),
    LanguageEntry::new("qu-PE", "Quechua (Peru)"),
    LanguageEntry::new("ro", "Romanian"),
    LanguageEntry::new("ro-RO", "Romanian (Romania)"),
    LanguageEntry::new("ru", "Russian"),
    LanguageEntry::new("ru-RU", "Russian (Russia)"),
    LanguageEntry::new("se-FI", "Sami (Inari) (Finland)"),
    LanguageEntry::new("se-NO", "Sami (Lule) (Norway)"),
    LanguageEntry::new("se-SE", "Sami (Lule) (Sweden)"),
    LanguageEntry::new("se", "Sami (Northern)"),
    LanguageEntry::new("se-FI", "Sami (Northern) (Finland)"),
    LanguageEntry::new("se-NO", "Sami (Northern) (Norway)"),
    LanguageEntry::new("se-SE", "Sami (Northern) (Sweden)"),
    LanguageEntry::new("se-FI", "Sami (Skolt) (Finland)"),
    LanguageEntry::new("se-NO", "Sami (Southern) (Norway)"),
    LanguageEntry::new("se-SE", "Sami (Southern) (Sweden)"),
    LanguageEntry::new("sm", "Samoan"),
    LanguageEntry::new("sa", "Sanskrit"),
    LanguageEntry::new("sa-IN", "Sanskrit (India)"),
    LanguageEntry::new("gd", "Scots Gaelic"),
    LanguageEntry::new("nso", "Sepedi"),
    LanguageEntry::new("sr", "Serbian"),
    LanguageEntry::new("sr-BA", "Serbian (Cyrillic) (Bosnia and Herzegovina)"),
    LanguageEntry::new("sr-SP", "Serbian (Cyrillic) (Serbia and Montenegro)"),
    LanguageEntry::new("sr-BA", "Serbian (Latin) (Bosnia and Herzegovina)"),
    LanguageEntry::new("sr-SP", "Serbian (Latin) (Serbia and Montenegro)"),
    LanguageEntry::new("st", "Sesotho"),
    LanguageEntry::new("sn", "Shona"),
    LanguageEntry::new("sd", "Sindhi"),
    LanguageEntry::new("si", "Sinhala"),
    LanguageEntry::new("sk", "Slovak"),
    LanguageEntry::new("sk-SK", "Slovak (Slovakia)"),
    LanguageEntry::new("sl", "Slovenian"),
    LanguageEntry::new("sl-SI", "Slovenian (Slovenia)"),
    LanguageEntry::new("so", "Somali"),
    LanguageEntry::new("es", "Spanish"),
    LanguageEntry::new("es-AR", "Spanish (Argentina)"),
    LanguageEntry::new("es-BO", "Spanish (Bolivia)"),
    LanguageEntry::new("es-ES", "Spanish (Castilian)"),
    LanguageEntry::new("es-CL", "Spanish (Chile)"),
    LanguageEntry::new("es-CO", "Spanish (Colombia)"),
    LanguageEntry::new("es-CR", "Spanish (Costa Rica)"),
    LanguageEntry::new("es-DO", "Spanish (Dominican Republic)"),
    LanguageEntry::new("es-EC", "Spanish (Ecuador)"),
    LanguageEntry::new("es-SV", "Spanish (El Salvador)"),
    LanguageEntry::new("es-GT", "Spanish (Guatemala)"),
    LanguageEntry::new("es-HN", "Spanish (Honduras)"),
    LanguageEntry::new("es-MX", "Spanish (Mexico)"),
    LanguageEntry::new("es-NI", "Spanish (Nicaragua)"),
    LanguageEntry::new("es-PA", "Spanish (Panama)"),
    LanguageEntry::new("es-PY", "Spanish (Paraguay)"),
    LanguageEntry::new("es-PE", "Spanish (Peru)"),
    LanguageEntry::new("es-PR", "Spanish (Puerto Rico)"),
    LanguageEntry::new("es-ES", "Spanish (Spain)"),
    LanguageEntry::new("es-UY", "Spanish (Uruguay)"),
    LanguageEntry::new("es-VE", "Spanish (Venezuela)"),
    LanguageEntry::new("su", "Sundanese"),
    LanguageEntry::new("sw", "Swahili"),
    LanguageEntry::new("sw-KE", "Swahili (Kenya)"),
    LanguageEntry::new("sv", "Swedish"),
    LanguageEntry::new("sv-FI", "Swedish (Finland)"),
    LanguageEntry::new("sv-SE", "Swedish (Sweden)"),
    LanguageEntry::new("syr", "Syriac"),
    LanguageEntry::new("syr-SY", "Syriac (Syria)"),
    LanguageEntry::new("tl", "Tagalog"),
    LanguageEntry::new("tl-PH", "Tagalog (Philippines)"),
    LanguageEntry::new("tg", "Tajik"),
    LanguageEntry::new("ta", "Tamil"),
    LanguageEntry::new("ta-IN", "Tamil (India)"),
    LanguageEntry::new("tt", "Tatar"),
    LanguageEntry::new("tt-RU", "Tatar (Russia)"),
    LanguageEntry::new("te", "Telugu"),
    LanguageEntry::new("te-IN", "Telugu (India)"),
    LanguageEntry::new("th", "Thai"),
    LanguageEntry::new("th-TH", "Thai (Thailand)"),
    LanguageEntry::new("ti", "Tigrinya"),
    LanguageEntry::new("ts", "Tsonga"),
    LanguageEntry::new("tn", "Tswana"),
    LanguageEntry::new("tn-ZA", "Tswana (South Africa)"),
    LanguageEntry::new("tr", "Turkish"),
    LanguageEntry::new("tr-TR", "Turkish (Turkey)"),
    LanguageEntry::new("tk", "Turkmen"),
    LanguageEntry::new("ak", "Twi"),
    LanguageEntry::new("uk", "Ukrainian"),
    LanguageEntry::new("uk-UA", "Ukrainian (Ukraine)"),
    LanguageEntry::new("ur", "Urdu"),
    LanguageEntry::new("ur-PK", "Urdu (Islamic Republic of Pakistan)"),
    LanguageEntry::new("ug", "Uyghur"),
    LanguageEntry::new("uz-UZ", "Uzbek (Cyrillic) (Uzbekistan)"),
    LanguageEntry::new("uz", "Uzbek (Latin)"),
    LanguageEntry::new("uz-UZ", "Uzbek (Latin) (Uzbekistan)"),
    LanguageEntry::new("vi", "Vietnamese"),
    LanguageEntry::new("vi-VN", "Vietnamese (Viet Nam)"),
    LanguageEntry::new("cy", "Welsh"),
    LanguageEntry::new("cy-GB", "Welsh (United Kingdom)"),
    LanguageEntry::new("xh", "Xhosa"),
    LanguageEntry::new("xh-ZA", "Xhosa (South Africa)"),
    LanguageEntry::new("yi", "Yiddish"),
    LanguageEntry::new("yo", "Yoruba"),
    LanguageEntry::new("zu", "Zulu"),
    LanguageEntry::new("zu-ZA", "Zulu (South Africa)"),
];
