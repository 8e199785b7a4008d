use sqlx::SqlitePool;

// Fixed reference data for the reunion: the roster as printed in the
// invitation list (names keep their original spacing) and the seat chart.
// The chart uses the compact spelling of each name, which is what the
// check-in form submits.

pub const MEMBERS: &[(&str, i64)] = &[
    ("荘　茗", 27),
    ("吉積夏帆", 27),
    ("嶋森　一司", 27),
    ("根岸佳希", 27),
    ("多田万寿美", 27),
    ("寺沢遥希", 27),
    ("平戸　涼太郎", 27),
    ("宮田駿", 27),
    ("高橋　柚衣", 27),
    ("草山祥枝", 27),
    ("東 一成", 28),
    ("若杉俊輔", 28),
    ("鈴木 涼馬", 28),
    ("波多野大知", 28),
    ("池田有紗", 28),
    ("駒 紗綾", 28),
    ("菅原諒馬", 28),
    ("伊東ひろや", 28),
    ("岡田　航", 29),
    ("加藤佑望", 29),
    ("大谷　海羽", 29),
    ("山田穂乃花", 29),
    ("富田　晴翔", 30),
    ("沢井 駿", 30),
    ("服部明日夏", 30),
    ("大硲　聖将", 30),
    ("鳴海 春香", 30),
    ("物部　真也", 30),
    ("松本　累", 31),
    ("恩田崚平", 31),
    ("池田彩夏", 31),
    ("宇多村桃子", 31),
    ("大谷 亮平", 31),
    ("斎藤千紘", 31),
    ("岡田　陸", 31),
    ("渡邉紫乃", 31),
    ("清野　紗更", 31),
    ("新田美優", 31),
    ("福田彩花", 31),
    ("田中美羽", 31),
    ("小保方彩里", 31),
    ("華井　杏菜", 31),
    ("木幡涼真", 32),
    ("徳泉雪音", 32),
    ("岩田彩", 32),
    ("加藤里彩", 32),
    ("柳本実玖", 32),
    ("荒井優奈", 32),
    ("詹　合翔", 32),
    ("髙橋翼", 33),
    ("南　里和", 33),
    ("山内美陽", 33),
    ("柏木 晴帆", 33),
    ("木下　未久実", 33),
    ("渡邉篤", 33),
    ("世耕洸樹", 33),
    ("芦川真隆", 33),
    ("森田瑞央", 33),
    ("村下舞衣", 33),
    ("清透馬", 33),
    ("鶴岡茉紘", 33),
    ("小野 凜太郎", 33),
    ("鈴木直紀", 33),
    ("石津周都", 33),
    ("井上遥香", 33),
    ("平野恵樹", 33),
    ("中山拓樹", 33),
    ("小豆彩巴", 33),
    ("新納愛菜", 33),
    ("張宸瑜", 34),
    ("山中瞭", 34),
    ("松井柚里香", 34),
    ("伊藤遥香", 34),
    ("鈴木泰理", 34),
    ("谷川優奈", 34),
    ("成田陽向子", 34),
    ("井澤菜々美", 34),
    ("坂本頼星", 34),
    ("岡村　洋介", 34),
    ("小笠原由華", 34),
    ("清水彩音", 34),
    ("海老名里来", 34),
    ("井手 大樹", 34),
    ("紀伊龍二", 34),
    ("富田佳奈", 35),
    ("齋藤希光", 35),
    ("細渕花夏", 35),
    ("松村　真之介", 35),
    ("和久井理那", 35),
    ("鄭文瑄", 35),
    ("大塚彩月", 35),
    ("中村瞳", 35),
    ("山崎愛菜", 35),
    ("森田 結奈", 35),
    ("岡莉子", 35),
    ("丸橋怜央", 35),
    ("小奈佳怜", 35),
    ("外尾春菜", 35),
    ("豊永茉由", 35),
    ("松原理輝", 35),
    ("中本有亮", 35),
    ("平井優衣", 35),
    ("三輪柊介", 36),
    ("金山英斗", 36),
    ("山香　実輝", 36),
    ("中岫奏希", 36),
    ("加納汐梨", 36),
    ("森丈流", 36),
    ("近藤智之", 36),
    ("前田理子", 36),
    ("小池莉々夏", 36),
    ("ブランチ瑠唯", 36),
    ("萩原和子", 36),
    ("木村健斗", 36),
    ("安村拓馬", 36),
    ("小笠原正義", 36),
    ("武田正太朗", 36),
];

pub const SEATS: &[(&str, i64, &str, i64)] = &[
    // 卓1
    ("荘茗", 27, "1", 1),
    ("吉積夏帆", 27, "1", 2),
    ("嶋森一司", 27, "1", 3),
    ("根岸佳希", 27, "1", 4),
    ("多田万寿美", 27, "1", 5),
    // 卓2
    ("寺沢遥希", 27, "2", 1),
    ("平戸涼太郎", 27, "2", 2),
    ("宮田駿", 27, "2", 3),
    ("高橋柚衣", 27, "2", 4),
    ("草山祥枝", 27, "2", 5),
    // 卓3
    ("東一成", 28, "3", 1),
    ("若杉俊輔", 28, "3", 2),
    ("鈴木涼馬", 28, "3", 3),
    ("波多野大知", 28, "3", 4),
    ("池田有紗", 28, "3", 5),
    ("菅原諒馬", 28, "3", 6),
    ("伊東ひろや", 28, "3", 7),
    // 卓4
    ("岡田航", 29, "4", 1),
    ("加藤佑望", 29, "4", 2),
    ("大谷海羽", 29, "4", 3),
    ("山田穂乃花", 29, "4", 4),
    ("森田結奈", 35, "4", 5),
    ("齋藤希光", 35, "4", 6),
    ("細渕花夏", 35, "4", 7),
    ("山崎愛菜", 35, "4", 8),
    ("中村瞳", 35, "4", 9),
    // 卓5
    ("富田晴翔", 30, "5", 1),
    ("沢井駿", 30, "5", 2),
    ("服部明日夏", 30, "5", 3),
    ("大硲聖将", 30, "5", 4),
    ("鳴海春香", 30, "5", 5),
    ("物部真也", 30, "5", 6),
    ("外尾春菜", 35, "5", 7),
    ("豊永茉由", 35, "5", 8),
    ("富田佳奈", 35, "5", 9),
    // 卓6
    ("松本累", 31, "6", 1),
    ("恩田崚平", 31, "6", 2),
    ("池田彩夏", 31, "6", 3),
    ("宇多村桃子", 31, "6", 4),
    ("大谷亮平", 31, "6", 5),
    ("斎藤千紘", 31, "6", 6),
    ("岡田陸", 31, "6", 7),
    ("華井杏菜", 31, "6", 8),
    ("小保方彩里", 31, "6", 9),
    // 卓7
    ("渡邉紫乃", 31, "7", 1),
    ("清野紗更", 31, "7", 2),
    ("新田美優", 31, "7", 3),
    ("福田彩花", 31, "7", 4),
    ("田中美羽", 31, "7", 5),
    ("松原理輝", 35, "7", 6),
    ("中本有亮", 35, "7", 7),
    ("平井優衣", 35, "7", 8),
    // 卓8
    ("木幡涼真", 32, "8", 1),
    ("徳泉雪音", 32, "8", 2),
    ("岩田彩", 32, "8", 3),
    ("加藤里彩", 32, "8", 4),
    ("柳本実玖", 32, "8", 5),
    ("荒井優奈", 32, "8", 6),
    ("詹合翔", 32, "8", 7),
    ("小笠原正義", 36, "8", 8),
    ("武田正太朗", 36, "8", 9),
    ("近藤智之", 36, "8", 10),
    // 卓9
    ("髙橋翼", 33, "9", 1),
    ("南里和", 33, "9", 2),
    ("山内美陽", 33, "9", 3),
    ("柏木晴帆", 33, "9", 4),
    ("木下未久実", 33, "9", 5),
    ("渡邉篤", 33, "9", 6),
    ("三輪柊介", 36, "9", 7),
    ("小笠原由華", 34, "9", 8),
    ("紀伊龍二", 34, "9", 9),
    // 卓10
    ("芦川真隆", 33, "10", 1),
    ("森田瑞央", 33, "10", 2),
    ("村下舞衣", 33, "10", 3),
    ("清透馬", 33, "10", 4),
    ("金山英斗", 36, "10", 5),
    ("山香実輝", 36, "10", 6),
    ("伊藤遥香", 34, "10", 7),
    ("山中瞭", 34, "10", 8),
    ("井手大樹", 34, "10", 9),
    // 卓11
    ("鶴岡茉紘", 33, "11", 1),
    ("小野凜太郎", 33, "11", 2),
    ("鈴木直紀", 33, "11", 3),
    ("石津周都", 33, "11", 4),
    ("井上遥香", 33, "11", 5),
    ("中岫奏希", 36, "11", 6),
    ("加納汐梨", 36, "11", 7),
    ("鈴木泰理", 34, "11", 8),
    ("谷川優奈", 34, "11", 9),
    ("井澤菜々美", 34, "11", 10),
    ("松井柚里香", 34, "11", 11),
    // 卓12
    ("中山拓樹", 33, "12", 1),
    ("小豆彩巴", 33, "12", 2),
    ("新納愛菜", 33, "12", 3),
    ("平野恵樹", 33, "12", 4),
    ("世耕洸樹", 33, "12", 5),
    ("ブランチ瑠唯", 36, "12", 6),
    ("萩原和子", 36, "12", 7),
    ("清水彩音", 34, "12", 8),
    ("坂本頼星", 34, "12", 9),
    ("海老名里来", 34, "12", 10),
    // 自由席
    ("成田陽向子", 34, "自由", 1),
    ("岡村洋介", 34, "自由", 2),
    ("張宸瑜", 34, "自由", 3),
    ("駒紗綾", 28, "4", 6),
];

pub const SQL_INSERT_MEMBER: &str = r#"
INSERT INTO members (name, generation) VALUES (?1, ?2)
"#;

pub const SQL_INSERT_SEAT: &str = r#"
INSERT INTO seats (name, generation, table_number, seat_position)
VALUES (?1, ?2, ?3, ?4)
"#;

pub async fn seed_roster(pool: &SqlitePool) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;

    for (name, generation) in MEMBERS.iter().copied() {
        sqlx::query(SQL_INSERT_MEMBER)
            .bind(name)
            .bind(generation)
            .execute(&mut *tx)
            .await?;
    }

    for (name, generation, table_number, seat_position) in SEATS.iter().copied() {
        sqlx::query(SQL_INSERT_SEAT)
            .bind(name)
            .bind(generation)
            .bind(table_number)
            .bind(seat_position)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}
