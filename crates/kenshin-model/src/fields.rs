//! Named positions of the source checkup record.
//!
//! The source file carries no usable column names, so every position the
//! converter reads is declared here once with its clinical label.

use crate::record::Field;

const fn f(index: usize, label: &'static str) -> Field {
    Field::new(index, label)
}

// Identification
pub const ORGANIZATION_CODE: Field = f(0, "所属cd1");
pub const ORGANIZATION_NAME: Field = f(3, "所属名1");
pub const OFFICE_CODE: Field = f(4, "所属cd2");
pub const OFFICE_NAME: Field = f(5, "所属名2");
pub const PERSONAL_ID: Field = f(6, "個人ID");
pub const NAME_KANJI: Field = f(7, "漢字氏名");
pub const NAME_KANA: Field = f(8, "カナ氏名");
pub const BIRTH_DATE: Field = f(9, "生年月日");
pub const SEX: Field = f(10, "性別");
pub const AGE: Field = f(11, "年齢");
pub const INSURER_NUMBER: Field = f(12, "保険者番号");
pub const INSURANCE_SYMBOL: Field = f(13, "保険証記号");
pub const INSURANCE_NUMBER: Field = f(14, "保険証番号");
pub const VOUCHER_NUMBER: Field = f(15, "受診券整理番号");
pub const VOUCHER_EXPIRY: Field = f(16, "受診券有効期限");
pub const COURSE_CODE: Field = f(17, "コースコード");
pub const COURSE_NAME: Field = f(18, "コース名");
pub const EXAM_DATE: Field = f(19, "受診日");
pub const RECEIPT_NUMBER: Field = f(20, "受診番号");
pub const FACILITY: Field = f(21, "施設/巡回区分");

// Examination and symptoms
pub const EXAM_FINDINGS: [Field; 3] = [
    f(22, "診察所見1"),
    f(23, "診察所見2"),
    f(24, "診察所見3"),
];
pub const SYMPTOMS: [Field; 5] = [
    f(25, "自覚症状1"),
    f(26, "自覚症状2"),
    f(27, "自覚症状3"),
    f(28, "自覚症状4"),
    f(29, "自覚症状5"),
];

/// One medical-history entry: disease, age at onset, outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySlot {
    pub disease: Field,
    pub age: Field,
    pub outcome: Field,
}

const fn history(base: usize) -> HistorySlot {
    HistorySlot {
        disease: f(base, "既往歴"),
        age: f(base + 1, "既往歴年齢"),
        outcome: f(base + 2, "既往歴転帰"),
    }
}

pub const HISTORY: [HistorySlot; 10] = [
    history(30),
    history(33),
    history(36),
    history(39),
    history(42),
    history(45),
    history(48),
    history(51),
    history(54),
    history(57),
];

// Body measurements
pub const HEIGHT: Field = f(60, "身長");
pub const WEIGHT: Field = f(61, "体重");
pub const BMI: Field = f(62, "BMI");
pub const WAIST: Field = f(63, "腹囲");
pub const BODY_FAT: Field = f(64, "体脂肪率");

// Visual acuity
pub const ACUITY_FAR_NAKED_RIGHT: Field = f(65, "5m視力裸眼右");
pub const ACUITY_FAR_NAKED_LEFT: Field = f(66, "5m視力裸眼左");
pub const ACUITY_FAR_CORRECTED_RIGHT: Field = f(67, "5m視力矯正右");
pub const ACUITY_FAR_CORRECTED_LEFT: Field = f(68, "5m視力矯正左");
pub const ACUITY_NEAR_NAKED_RIGHT: Field = f(69, "近点視力裸眼右");
pub const ACUITY_NEAR_NAKED_LEFT: Field = f(70, "近点視力裸眼左");
pub const ACUITY_NEAR_CORRECTED_RIGHT: Field = f(71, "近点視力矯正右");
pub const ACUITY_NEAR_CORRECTED_LEFT: Field = f(72, "近点視力矯正左");

// Hearing
pub const HEARING_1K_GRADE_RIGHT: Field = f(73, "聴力右1K判定");
pub const HEARING_1K_GRADE_LEFT: Field = f(74, "聴力左1K判定");
pub const HEARING_4K_GRADE_RIGHT: [Field; 2] = [f(75, "聴力右4K判定1"), f(76, "聴力右4K判定2")];
pub const HEARING_4K_GRADE_LEFT: [Field; 2] = [f(77, "聴力左4K判定1"), f(78, "聴力左4K判定2")];
pub const HEARING_1K_DB_RIGHT: Field = f(79, "聴力右1K(dB)");
pub const HEARING_1K_DB_LEFT: Field = f(80, "聴力左1K(dB)");
pub const HEARING_4K_DB_RIGHT: [Field; 2] = [f(81, "聴力右4K(dB)1"), f(82, "聴力右4K(dB)2")];
pub const HEARING_4K_DB_LEFT: [Field; 2] = [f(83, "聴力左4K(dB)1"), f(84, "聴力左4K(dB)2")];
pub const HEARING_REMARK: Field = f(85, "聴力所見");

// Blood pressure
pub const BP_FIRST_SYSTOLIC_GRADE: Field = f(86, "血圧1回目収縮期判定");
pub const BP_FIRST_DIASTOLIC_GRADE: Field = f(87, "血圧1回目拡張期判定");
pub const BP_SECOND_SYSTOLIC_GRADE: Field = f(88, "血圧2回目収縮期判定");
pub const BP_SECOND_DIASTOLIC_GRADE: Field = f(89, "血圧2回目拡張期判定");
pub const BP_FIRST_SYSTOLIC: Field = f(90, "収縮期血圧1回目");
pub const BP_FIRST_DIASTOLIC: Field = f(91, "拡張期血圧1回目");
pub const BP_SECOND_SYSTOLIC: Field = f(92, "収縮期血圧2回目");
pub const BP_SECOND_DIASTOLIC: Field = f(93, "拡張期血圧2回目");

// ECG and chest
pub const ECG_FINDINGS: [Field; 5] = [
    f(94, "心電図所見1"),
    f(95, "心電図所見2"),
    f(96, "心電図所見3"),
    f(97, "心電図所見4"),
    f(98, "心電図所見5"),
];
pub const HEART_RATE: Field = f(99, "心拍数");
pub const CHEST_XRAY_INDIRECT: Field = f(100, "胸部X線間接");
pub const CHEST_XRAY_DIRECT: Field = f(101, "胸部X線直接");
pub const CHEST_XRAY_FINDINGS: [Field; 5] = [
    f(103, "胸部X線所見1"),
    f(104, "胸部X線所見2"),
    f(105, "胸部X線所見3"),
    f(106, "胸部X線所見4"),
    f(107, "胸部X線所見5"),
];
pub const CHEST_CT_PERFORMED: Field = f(108, "胸部CT");
pub const CHEST_CT_FINDINGS: [Field; 4] = [
    f(109, "胸部CT所見1"),
    f(110, "胸部CT所見2"),
    f(111, "胸部CT所見3"),
    f(112, "胸部CT所見4"),
];
pub const SPUTUM_CYTOLOGY: Field = f(113, "喀痰細胞診");

// Lung function
pub const VITAL_CAPACITY: Field = f(114, "肺活量");
pub const FEV1: Field = f(115, "１秒量");
pub const FORCED_VITAL_CAPACITY: Field = f(116, "努力肺活量");
pub const FEV1_RATIO: Field = f(117, "１秒率");
pub const PERCENT_VITAL_CAPACITY: Field = f(118, "％肺活量");
pub const PERCENT_FEV1: Field = f(119, "％１秒量");

// Fundus and intraocular pressure
pub const FUNDUS_SCHEIE_RIGHT: [Field; 2] = [f(122, "眼底右シェイエS"), f(120, "眼底右シェイエH")];
pub const FUNDUS_SCHEIE_LEFT: [Field; 2] = [f(123, "眼底左シェイエS"), f(124, "眼底左シェイエH")];
pub const FUNDUS_KW_RIGHT: Field = f(124, "眼底右KW");
pub const FUNDUS_KW_LEFT: Field = f(125, "眼底左KW");
pub const FUNDUS_SCOTT_RIGHT: Field = f(126, "眼底右Scott");
pub const FUNDUS_SCOTT_LEFT: Field = f(127, "眼底左Scott");
pub const FUNDUS_OTHER: [Field; 5] = [
    f(128, "眼底その他所見1"),
    f(129, "眼底その他所見2"),
    f(130, "眼底その他所見3"),
    f(131, "眼底その他所見4"),
    f(132, "眼底その他所見5"),
];
pub const EYE_PRESSURE_RIGHT: Field = f(133, "眼圧右");
pub const EYE_PRESSURE_LEFT: Field = f(134, "眼圧左");

pub const ABDOMINAL_ECHO_FINDINGS: [Field; 7] = [
    f(136, "腹部超音波所見1"),
    f(137, "腹部超音波所見2"),
    f(138, "腹部超音波所見3"),
    f(139, "腹部超音波所見4"),
    f(140, "腹部超音波所見5"),
    f(141, "腹部超音波所見6"),
    f(142, "腹部超音波所見7"),
];

// Urinalysis
pub const URINE_GLUCOSE: Field = f(143, "尿糖");
pub const URINE_PROTEIN: Field = f(144, "尿蛋白");
pub const URINE_OCCULT_BLOOD: Field = f(145, "尿潜血");
pub const URINE_UROBILINOGEN: Field = f(146, "尿ウロビリノーゲン");
pub const URINE_GRAVITY: Field = f(147, "尿比重");
pub const URINE_PH: Field = f(148, "尿pH");
pub const SEDIMENT_RBC: Field = f(149, "尿沈渣赤血球");
pub const SEDIMENT_WBC: Field = f(150, "尿沈渣白血球");
pub const SEDIMENT_SQUAMOUS: Field = f(151, "尿沈渣扁平上皮");
pub const SEDIMENT_GRANULAR_CAST: Field = f(152, "尿沈渣顆粒円柱");
pub const SEDIMENT_HYALINE_CAST: Field = f(153, "尿沈渣ガラス円柱");
pub const SEDIMENT_OTHER: [Field; 3] = [
    f(154, "尿沈渣その他1"),
    f(155, "尿沈渣その他2"),
    f(156, "尿沈渣その他3"),
];

// Hematology
pub const RBC: Field = f(157, "赤血球数");
pub const HEMOGLOBIN: Field = f(158, "血色素量");
pub const HEMATOCRIT: Field = f(159, "ヘマトクリット");
pub const WBC: Field = f(160, "白血球数");
pub const PLATELETS: Field = f(161, "血小板数");
pub const MCV: Field = f(162, "MCV");
pub const MCH: Field = f(163, "MCH");
pub const MCHC: Field = f(164, "MCHC");
pub const NEUTROPHIL: Field = f(165, "好中球(Neut)");
pub const BAND: Field = f(166, "棹状核球(Stab)");
pub const SEGMENTED: Field = f(167, "分葉核球(Seg)");
pub const EOSINOPHIL: Field = f(168, "好酸球(Eosino)");
pub const BASOPHIL: Field = f(169, "好塩基球(Baso)");
pub const LYMPHOCYTE: Field = f(170, "リンパ球(Lympho)");
pub const MONOCYTE: Field = f(171, "単球(Mono)");
pub const DIFFERENTIAL_OTHER: [Field; 2] = [f(172, "白血球分画その他1"), f(173, "白血球分画その他2")];
pub const SERUM_IRON: Field = f(174, "血清鉄");
pub const FERRITIN: Field = f(175, "フェリチン");
pub const BLOOD_TYPE_ABO: Field = f(176, "血液型ABO");
pub const BLOOD_TYPE_RH: Field = f(177, "血液型Rh");

// Specimen conditions
pub const HOURS_SINCE_MEAL: Field = f(178, "食後時間");
pub const MENSTRUATION: Field = f(179, "生理");
pub const PREGNANT: Field = f(180, "妊娠");
pub const PREGNANCY_SUSPECTED: Field = f(181, "妊娠の可能性");
pub const SPECIMEN_REMARKS: [Field; 2] = [f(182, "検体コメント1"), f(183, "検体コメント2")];

// Biochemistry
pub const TOTAL_PROTEIN: Field = f(184, "血清総蛋白");
pub const ALBUMIN: Field = f(185, "血清アルブミン");
pub const AG_RATIO: Field = f(186, "A/G比");
pub const AST: Field = f(187, "AST(GOT)");
pub const ALT: Field = f(188, "ALT(GPT)");
pub const GGT: Field = f(189, "γ-GTP");
pub const ALP: Field = f(190, "ALP");
pub const LDH: Field = f(191, "LDH");
pub const CHOLINESTERASE: Field = f(192, "コリンエステラーゼ");
pub const LAP: Field = f(193, "LAP");
pub const TOTAL_BILIRUBIN: Field = f(194, "総ビリルビン");
pub const DIRECT_BILIRUBIN: Field = f(195, "直接ビリルビン");
pub const CPK: Field = f(196, "CPK");
pub const BNP: Field = f(197, "BNP");
pub const TOTAL_CHOLESTEROL: Field = f(198, "総コレステロール");
pub const HDL: Field = f(199, "HDLコレステロール");
pub const LDL: Field = f(200, "LDLコレステロール");
pub const TRIGLYCERIDE: Field = f(201, "中性脂肪");
pub const NON_HDL: Field = f(202, "non-HDLコレステロール");
pub const GLUCOSE: Field = f(203, "血糖");
pub const HBA1C: Field = f(204, "HbA1c(NGSP)");
pub const AMYLASE: Field = f(205, "血清アミラーゼ");
pub const URIC_ACID: Field = f(206, "尿酸");
pub const BUN: Field = f(207, "尿素窒素");
pub const CREATININE: Field = f(208, "血清クレアチニン");
pub const EGFR: Field = f(209, "eGFR");
pub const SODIUM: Field = f(210, "ナトリウム");
pub const POTASSIUM: Field = f(211, "カリウム");
pub const CHLORIDE: Field = f(212, "クロール");
pub const CALCIUM: Field = f(213, "カルシウム");
pub const PHOSPHORUS: Field = f(214, "無機リン");

// Serology
pub const HBS_ANTIGEN: Field = f(215, "HBs抗原定性");
pub const HBS_ANTIGEN_TITER: Field = f(216, "HBs抗原定量");
pub const HBS_ANTIBODY: Field = f(217, "HBs抗体定性");
pub const HBS_ANTIBODY_TITER: Field = f(218, "HBs抗体定量");
pub const HCV_ANTIBODY: Field = f(219, "HCV抗体定性");
pub const HCV_ANTIBODY_TITER: Field = f(220, "HCV抗体定量");
pub const CRP: Field = f(221, "CRP定量");
pub const RF: Field = f(222, "RF定量");
pub const TPHA: Field = f(223, "梅毒反応(TPHA)");
pub const RPR: Field = f(224, "梅毒反応(RPR)");

// Tumor markers and thyroid
pub const PSA: Field = f(225, "PSA");
pub const CA125: Field = f(226, "CA125");
pub const CA19_9: Field = f(227, "CA19-9");
pub const CEA: Field = f(228, "CEA");
pub const AFP: Field = f(229, "AFP");
pub const CYFRA: Field = f(230, "シフラ");
pub const TSH: Field = f(231, "TSH");
pub const FT3: Field = f(232, "FT3");
pub const FT4: Field = f(233, "FT4");
pub const STOOL_OVA: Field = f(234, "便中卵");

// Gastric
pub const GASTRIC_XRAY_INDIRECT: Field = f(235, "胃部X線間接");
pub const GASTRIC_XRAY_DIRECT: Field = f(236, "胃部X線直接");
pub const GASTRIC_XRAY_FINDINGS: [Field; 5] = [
    f(238, "胃部X線所見1"),
    f(239, "胃部X線所見2"),
    f(240, "胃部X線所見3"),
    f(241, "胃部X線所見4"),
    f(242, "胃部X線所見5"),
];
pub const ENDOSCOPY_FINDINGS: [Field; 5] = [
    f(243, "胃内視鏡所見1"),
    f(244, "胃内視鏡所見2"),
    f(245, "胃内視鏡所見3"),
    f(246, "胃内視鏡所見4"),
    f(247, "胃内視鏡所見5"),
];
pub const BIOPSY_FINDINGS: [Field; 2] = [f(248, "生検所見1"), f(249, "生検所見2")];
pub const PEPSINOGEN_1: Field = f(250, "PGⅠ");
pub const PEPSINOGEN_2: Field = f(251, "PGⅡ");
pub const PEPSINOGEN_RATIO: Field = f(252, "PGⅠ/Ⅱ比");
pub const PYLORI_QUALITATIVE: Field = f(253, "ピロリIgG抗体定性");
pub const PYLORI_TITER: Field = f(254, "ピロリIgG抗体定量");
pub const GASTRIC_ABC: Field = f(255, "ABC検診判定分類");
pub const FECAL_BLOOD: [Field; 2] = [f(256, "便潜血1回目"), f(257, "便潜血2回目")];

// Breast and cervical
pub const BREAST_ECHO_FINDINGS: [Field; 3] = [
    f(258, "乳腺エコー所見1"),
    f(259, "乳腺エコー所見2"),
    f(260, "乳腺エコー所見3"),
];
pub const MAMMOGRAPHY_ONE_VIEW: Field = f(261, "マンモ1方向");
pub const MAMMOGRAPHY_TWO_VIEWS: Field = f(262, "マンモ2方向");
pub const MAMMOGRAPHY_FINDINGS: [Field; 3] = [
    f(263, "マンモ所見1"),
    f(264, "マンモ所見2"),
    f(265, "マンモ所見3"),
];
pub const CERVICAL_BETHESDA: Field = f(266, "子宮頸部細胞診（ベセスダ）");
pub const CERVICAL_JSOG: Field = f(267, "子宮頸部細胞診（日母分類）");
pub const PELVIC_EXAM_FINDINGS: [Field; 3] = [
    f(268, "子宮内診所見1"),
    f(269, "子宮内診所見2"),
    f(270, "子宮内診所見3"),
];

// Bone, cardiac and vascular
pub const BONE_DENSITY: Field = f(274, "骨密度(BMD)");
pub const CARDIAC_ECHO_FINDINGS: [Field; 4] = [
    f(275, "心臓超音波所見1"),
    f(276, "心臓超音波所見2"),
    f(277, "心臓超音波所見3"),
    f(278, "心臓超音波所見4"),
];
pub const ABI_RIGHT: Field = f(279, "ABI 右");
pub const ABI_LEFT: Field = f(280, "ABI 左");
pub const CAVI_RIGHT: Field = f(281, "CAVI 右");
pub const CAVI_LEFT: Field = f(282, "CAVI 左");
pub const CAROTID_ECHO_FINDINGS: [Field; 3] = [
    f(283, "頸動脈超音波所見1"),
    f(284, "頸動脈超音波所見2"),
    f(285, "頸動脈超音波所見3"),
];
pub const THYROID_ECHO_FINDINGS: [Field; 4] = [
    f(286, "甲状腺超音波所見1"),
    f(287, "甲状腺超音波所見2"),
    f(288, "甲状腺超音波所見3"),
    f(289, "甲状腺超音波所見4"),
];

// Specific health checkup questionnaire
pub const MEDICATION_HYPERTENSION: Field = f(290, "服薬（高血圧）");
pub const MEDICATION_DIABETES: Field = f(291, "服薬（糖尿病）");
pub const MEDICATION_LIPIDS: Field = f(292, "服薬（脂質）");
pub const HISTORY_CEREBROVASCULAR: Field = f(293, "既往歴（脳血管）");
pub const HISTORY_CARDIOVASCULAR: Field = f(294, "既往歴（心血管）");
pub const HISTORY_RENAL: Field = f(295, "既往歴（腎不全・人工透析）");
pub const HISTORY_ANEMIA: Field = f(296, "貧血");
pub const SMOKING: Field = f(297, "喫煙");
pub const WEIGHT_GAIN: Field = f(298, "20歳からの体重変化");
pub const EXERCISE: Field = f(299, "30分以上の運動習慣");
pub const PHYSICAL_ACTIVITY: Field = f(300, "歩行又は身体活動");
pub const WALKING_SPEED: Field = f(301, "歩行速度");
pub const CHEWING: Field = f(302, "咀嚼");
pub const EATING_SPEED: Field = f(303, "食べ方１（早食い等）");
pub const LATE_DINNER: Field = f(304, "食べ方２（就寝前）");
pub const SNACKING: Field = f(305, "食べ方３（間食）");
pub const SKIPS_BREAKFAST: Field = f(306, "食習慣（朝食）");
pub const DRINKING_FREQUENCY: Field = f(307, "飲酒習慣");
pub const DRINKING_AMOUNT: Field = f(308, "飲酒量");
pub const SLEEP: Field = f(309, "睡眠");
pub const LIFESTYLE_INTENTION: Field = f(310, "生活習慣の改善意志");
pub const GUIDANCE_WANTED: Field = f(311, "保健指導の希望");
pub const GUIDANCE_LEVEL: Field = f(312, "保健指導レベル");
pub const METABOLIC_SYNDROME: Field = f(313, "メタボリックシンドローム判定");

/// One graded finding: grade at `n`, comment at `n + 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingSlot {
    pub label: &'static str,
    pub grade: Field,
    pub comment: Field,
}

const fn finding(base: usize, label: &'static str) -> FindingSlot {
    FindingSlot {
        label,
        grade: f(base, label),
        comment: f(base + 2, label),
    }
}

pub const OVERALL: FindingSlot = finding(314, "総合判定");
/// Physician's diagnosis for the specific health checkup.
pub const DIAGNOSIS: Field = f(315, "医師の診断");
pub const HEARING: FindingSlot = finding(323, "聴力");
pub const BLOOD_PRESSURE: FindingSlot = finding(335, "血圧");
pub const URINE_SEDIMENT: FindingSlot = finding(356, "尿沈渣まとめ");
pub const CHEST_XRAY: FindingSlot = finding(359, "胸部X線");
pub const ECG: FindingSlot = finding(365, "心電図");
pub const DIFFERENTIAL: FindingSlot = finding(377, "白血球像");
pub const PANCREAS: FindingSlot = finding(383, "膵機能");
pub const FUNDUS: FindingSlot = finding(404, "眼底");
pub const GASTRIC_XRAY: FindingSlot = finding(410, "胃部X線");
pub const ENDOSCOPY: FindingSlot = finding(413, "胃内視鏡");
pub const ABDOMINAL_ECHO: FindingSlot = finding(419, "腹部エコー");
pub const FECAL: FindingSlot = finding(422, "便");
pub const PYLORI: FindingSlot = finding(434, "ピロリ菌");
pub const PEPSINOGEN: FindingSlot = finding(437, "PG検査");
pub const BREAST_ECHO: FindingSlot = finding(452, "乳腺超音波");
pub const MAMMOGRAPHY: FindingSlot = finding(455, "マンモグラフィー");
pub const PELVIC_EXAM: FindingSlot = finding(458, "婦人内診察");
pub const CERVICAL_CYTOLOGY: FindingSlot = finding(461, "子宮細胞診");
pub const CARDIAC_ECHO: FindingSlot = finding(467, "心エコー");
pub const CAROTID_ECHO: FindingSlot = finding(473, "頸動脈エコー");
pub const THYROID_ECHO: FindingSlot = finding(476, "甲状腺エコー");
pub const PHYSICAL_EXAM: FindingSlot = finding(479, "内科診察");
pub const CHEST_CT: FindingSlot = finding(482, "胸部CT");

/// Every graded finding, in source order, fed to the overall comment.
pub const FINDINGS: [FindingSlot; 58] = [
    OVERALL,
    finding(317, "BMI"),
    finding(320, "体脂肪測定"),
    HEARING,
    finding(326, "視力"),
    finding(329, "肺機能"),
    finding(332, "肺年齢判定"),
    BLOOD_PRESSURE,
    finding(338, "尿糖"),
    finding(341, "蛋白"),
    finding(344, "ウロビリ"),
    finding(347, "潜血"),
    finding(350, "尿比重"),
    finding(353, "尿PH"),
    URINE_SEDIMENT,
    CHEST_XRAY,
    finding(362, "喀痰"),
    ECG,
    finding(368, "貧血"),
    finding(371, "血小板"),
    finding(374, "白血球"),
    DIFFERENTIAL,
    finding(380, "肝機能"),
    PANCREAS,
    finding(386, "血中脂質"),
    finding(389, "腎機能"),
    finding(392, "腎機能コメント"),
    finding(395, "血清尿酸"),
    finding(398, "糖代謝"),
    finding(401, "電解質"),
    FUNDUS,
    finding(407, "眼圧"),
    GASTRIC_XRAY,
    ENDOSCOPY,
    finding(416, "胃内視生検"),
    ABDOMINAL_ECHO,
    FECAL,
    finding(425, "便虫卵"),
    finding(428, "CRP"),
    finding(431, "リウマチ"),
    PYLORI,
    PEPSINOGEN,
    finding(440, "腫瘍マーカー"),
    finding(443, "甲状腺"),
    finding(446, "梅毒"),
    finding(449, "BNP"),
    BREAST_ECHO,
    MAMMOGRAPHY,
    PELVIC_EXAM,
    CERVICAL_CYTOLOGY,
    finding(464, "骨密度"),
    CARDIAC_ECHO,
    finding(470, "血圧脈波"),
    CAROTID_ECHO,
    THYROID_ECHO,
    PHYSICAL_EXAM,
    CHEST_CT,
    finding(485, "治療中"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SOURCE_WIDTH;

    #[test]
    fn findings_are_spaced_by_three() {
        for (i, slot) in FINDINGS.iter().enumerate() {
            assert_eq!(slot.grade.index, 314 + 3 * i, "{}", slot.label);
            assert_eq!(slot.comment.index, slot.grade.index + 2);
        }
        assert_eq!(FINDINGS[57].comment.index, SOURCE_WIDTH - 1);
    }

    #[test]
    fn history_slots_are_consecutive_triples() {
        for (i, slot) in HISTORY.iter().enumerate() {
            assert_eq!(slot.disease.index, 30 + 3 * i);
            assert_eq!(slot.age.index, slot.disease.index + 1);
            assert_eq!(slot.outcome.index, slot.disease.index + 2);
        }
    }
}
