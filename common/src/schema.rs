//! 출력 스키마와 원천 컬럼 매핑 테이블
//!
//! 병합 결과의 컬럼 순서와, 각 시설 컬럼이 원천 파일의 어느 헤더에서
//! 오는지를 한 곳에 고정해 둔다. 원천 파일의 컬럼명이 바뀌면 여기만 고친다.

/// 출력 컬럼과 원천 컬럼의 대응
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacilityColumn {
    /// 병합 결과에 쓰이는 컬럼명
    pub output: &'static str,
    /// 원천 파일 헤더의 컬럼명
    pub source: &'static str,
}

const fn facility(output: &'static str, source: &'static str) -> FacilityColumn {
    FacilityColumn { output, source }
}

pub const COL_CODE: &str = "시장코드";
pub const COL_NAME: &str = "시장명";
pub const COL_LOT_ADDRESS: &str = "지번주소";
pub const COL_ROAD_ADDRESS: &str = "도로명주소";
pub const COL_SIDO: &str = "시도";
pub const COL_SIGUNGU: &str = "시군구";
pub const COL_PERIOD: &str = "시장개설주기";
pub const COL_STALLS: &str = "점포수";
pub const COL_FOUNDED: &str = "개설연도";
pub const COL_GOODS: &str = "취급품목";
pub const COL_LATITUDE: &str = "위도";
pub const COL_LONGITUDE: &str = "경도";
pub const COL_PHONE: &str = "전화번호";

/// 기본 정보 컬럼 (출력 선두 10개)
pub const BASIC_COLUMNS: [&str; 10] = [
    COL_CODE,
    COL_NAME,
    COL_LOT_ADDRESS,
    COL_ROAD_ADDRESS,
    COL_SIDO,
    COL_SIGUNGU,
    COL_PERIOD,
    COL_STALLS,
    COL_FOUNDED,
    COL_GOODS,
];

/// 첫 번째 파일(시장 현황)의 시설 보유여부 컬럼
pub const FILE_A_FACILITIES: [FacilityColumn; 23] = [
    facility("아케이드", "아케이드 보유 여부"),
    facility("엘리베이터/에스컬레이터", "엘리베이터_에스컬레이터_보유여부"),
    facility("고객지원센터", "고객지원센터 보유 여부"),
    facility("스프링쿨러", "스프링쿨러 보유 여부"),
    facility("화재감지기", "화재감지기 보유여부"),
    facility("유아놀이방", "유아놀이방_보유여부"),
    facility("종합콜센터", "종합콜센터_보유여부"),
    facility("고객휴게실", "고객휴게실_보유여부"),
    facility("수유센터", "수유센터_보유여부"),
    facility("물품보관함", "물품보관함_보유여부"),
    facility("자전거보관함", "자전거보관함_보유여부"),
    facility("체육시설", "체육시설_보유여부"),
    facility("간이도서관", "간이 도서관_보유여부"),
    facility("쇼핑카트", "쇼핑카트_보유여부"),
    facility("외국인안내센터", "외국인 안내센터_보유여부"),
    facility("고객동선통로", "고객동선통로_보유여부"),
    facility("방송센터", "방송센터_보유여부"),
    facility("문화교실", "문화교실_보유여부"),
    facility("공동물류창고", "공동물류창고_보유여부"),
    facility("시장전용고객주차장", "시장전용 고객주차장_보유여부"),
    facility("교육장", "교육장_보유여부"),
    facility("회의실", "회의실_보유여부"),
    facility("자동심장충격기", "자동심장충격기_보유여부"),
];

/// 두 번째 파일(표준데이터)의 시설 보유여부 컬럼
pub const FILE_B_FACILITIES: [FacilityColumn; 2] = [
    facility("공중화장실", "공중화장실보유여부"),
    facility("주차장", "주차장보유여부"),
];

/// 위치·연락처 컬럼 (출력 말미 3개)
pub const LOCATION_COLUMNS: [&str; 3] = [COL_LATITUDE, COL_LONGITUDE, COL_PHONE];

/// 두 번째 파일에서 그대로 옮기는 운영 정보 컬럼 (출력명 = 원천명)
pub const FILE_B_OPERATIONAL: [&str; 4] = [COL_PERIOD, COL_STALLS, COL_FOUNDED, COL_GOODS];

/// 출력 컬럼 수
pub const OUTPUT_WIDTH: usize =
    BASIC_COLUMNS.len() + FILE_A_FACILITIES.len() + FILE_B_FACILITIES.len() + LOCATION_COLUMNS.len();

/// 병합 결과 헤더를 순서대로 반환
pub fn output_header() -> Vec<&'static str> {
    let mut header = Vec::with_capacity(OUTPUT_WIDTH);
    header.extend(BASIC_COLUMNS);
    header.extend(FILE_A_FACILITIES.iter().map(|f| f.output));
    header.extend(FILE_B_FACILITIES.iter().map(|f| f.output));
    header.extend(LOCATION_COLUMNS);
    header
}

/// 출력 컬럼명의 위치
pub fn output_position(column: &str) -> Option<usize> {
    output_header().iter().position(|c| *c == column)
}
