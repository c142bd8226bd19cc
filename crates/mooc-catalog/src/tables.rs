/// Origin token (as embedded in course ids) to issuing institution.
pub(crate) const ORIGIN_SCHOOLS: &[(&str, &str)] = &[
    ("TsinghuaX", "清华大学"),
    ("PekingX", "北京大学"),
    ("HarvardX", "哈佛大学"),
    ("MITx", "麻省理工学院"),
    ("StanfordOnline", "斯坦福大学"),
    ("BerkeleyX", "加州大学伯克利分校"),
    ("UQx", "昆士兰大学"),
    ("McGillX", "麦吉尔大学"),
    ("TokyoTechX", "东京工业大学"),
    ("EPFLx", "洛桑联邦理工学院"),
    ("TUMx", "慕尼黑工业大学"),
    ("ETHx", "苏黎世联邦理工学院"),
    ("OxfordX", "牛津大学"),
    ("CambridgeX", "剑桥大学"),
    ("ColumbiaX", "哥伦比亚大学"),
    ("CornellX", "康奈尔大学"),
    ("YaleX", "耶鲁大学"),
    ("PrincetonX", "普林斯顿大学"),
    ("UTokyoX", "东京大学"),
    ("KyotoUx", "京都大学"),
];

/// Category label to bundled icon filename.
pub(crate) const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("数学", "cat_math.png"),
    ("物理", "cat_physics.png"),
    ("化学", "cat_chemistry.png"),
    ("生物", "cat_biology.png"),
    ("计算机", "cat_cs.png"),
    ("工程", "cat_engineering.png"),
    ("经济", "cat_economics.png"),
    ("管理", "cat_management.png"),
    ("文学", "cat_literature.png"),
    ("历史", "cat_history.png"),
    ("哲学", "cat_philosophy.png"),
    ("艺术", "cat_art.png"),
    ("医学", "cat_medicine.png"),
    ("法学", "cat_law.png"),
    ("教育", "cat_education.png"),
];

pub(crate) const DEFAULT_CATEGORY: &str = "通识";
pub(crate) const DEFAULT_ICON: &str = "cat_default.png";
