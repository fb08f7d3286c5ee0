use _model::{Category::*, CityId};

use super::{food, spot, City};

pub static CITIES: [City; 10] = [
    City {
        id: CityId::Seoul,
        name: "서울 (Seoul)",
        lat: 37.5665,
        lng: 126.978,
        spots: &[
            spot("경복궁 (Gyeongbokgung Palace)", 37.5796, 126.977, History),
            spot("N서울타워 (N Seoul Tower)", 37.5511, 126.9882, NightView),
            spot("북촌 한옥마을 (Bukchon Hanok Village)", 37.5826, 126.983, History),
            spot("더현대 서울 (The Hyundai Seoul)", 37.5259, 126.9284, Shopping),
            spot("반포 한강공원 (Banpo Hangang Park)", 37.5098, 126.9947, Nature),
        ],
        foods: &[
            food("명동교자 (Myeongdong Kyoja)", 37.5625, 126.9856, 4.2, Noodles),
            food("우래옥 (Woo Lae Oak)", 37.5683, 126.9987, 4.5, Korean),
            food("광장시장 (Gwangjang Market)", 37.5701, 126.9997, 4.3, StreetFood),
            food("어니언 안국 (Onion Anguk)", 37.5778, 126.9866, 4.0, Cafe),
            food("금돼지식당 (Gold Pig BBQ)", 37.5555, 127.0108, 4.6, Barbecue),
        ],
    },
    City {
        id: CityId::Busan,
        name: "부산 (Busan)",
        lat: 35.1796,
        lng: 129.0756,
        spots: &[
            spot("해운대 해수욕장 (Haeundae Beach)", 35.1587, 129.1603, Nature),
            spot("감천문화마을 (Gamcheon Culture Village)", 35.0975, 129.0106, Activity),
            spot("광안리 해수욕장 (Gwangalli Beach)", 35.1532, 129.1186, NightView),
            spot("해동용궁사 (Haedong Yonggungsa)", 35.1883, 129.2233, History),
            spot("스카이캡슐 (Sky Capsule)", 35.1605, 129.1666, Activity),
        ],
        foods: &[
            food("본전돼지국밥 (Bonjeon Pork Soup)", 35.1152, 129.0422, 4.1, Korean),
            food("해운대암소갈비 (Haeundae Ribs)", 35.1633, 129.1666, 4.3, Barbecue),
            food("초량밀면 (Choryang Milmyeon)", 35.1187, 129.0396, 4.0, Noodles),
            food("옵스 해운대점 (OPS Bakery)", 35.1623, 129.1601, 4.2, Cafe),
            food("이재모피자 (Lee Jaemo Pizza)", 35.1021, 129.0306, 4.4, Shopping),
        ],
    },
    City {
        id: CityId::Jeju,
        name: "제주 (Jeju)",
        lat: 33.3616,
        lng: 126.5116,
        spots: &[
            spot("성산일출봉 (Seongsan Ilchulbong)", 33.458, 126.9425, Nature),
            spot("협재 해수욕장 (Hyeopjae Beach)", 33.3938, 126.2396, Nature),
            spot("아르떼뮤지엄 (Arte Museum)", 33.3986, 126.3468, Activity),
            spot("오설록 티뮤지엄 (Osulloc Tea Museum)", 33.306, 126.2895, Shopping),
            spot("사려니숲길 (Saryeoni Forest)", 33.4077, 126.6425, Nature),
        ],
        foods: &[
            food("자매국수 (Jamae Guksu)", 33.5008, 126.5284, 4.0, Noodles),
            food("돈사돈 (Donsadon BBQ)", 33.4795, 126.4745, 4.4, Barbecue),
            food("우진해장국 (Ujin Haejangguk)", 33.5115, 126.5201, 4.5, Korean),
            food("랜디스도넛 (Randy's Donuts)", 33.4627, 126.3095, 4.2, Cafe),
            food("오는정김밥 (Oneunjeong Gimbap)", 33.2498, 126.5638, 4.3, StreetFood),
        ],
    },
    City {
        id: CityId::Gyeongju,
        name: "경주 (Gyeongju)",
        lat: 35.8562,
        lng: 129.2247,
        spots: &[
            spot("불국사 (Bulguksa Temple)", 35.7905, 129.3321, History),
            spot("동궁과 월지 (Donggung Palace)", 35.8341, 129.2266, NightView),
            spot("황리단길 (Hwangnidan-gil)", 35.8385, 129.2096, Shopping),
            spot("첨성대 (Cheomseongdae)", 35.8347, 129.219, History),
            spot("대릉원 (Daereungwon Tomb Complex)", 35.8391, 129.212, Nature),
        ],
        foods: &[
            food("황남빵 (Hwangnam Bread)", 35.8385, 129.2117, 4.2, Cafe),
            food("함양집 (Hamyangjip)", 35.854, 129.222, 4.1, Korean),
            food("료코 (Ryoko)", 35.8378, 129.2099, 4.3, Shopping),
            food("도솔마을 (Dosol Maeul)", 35.838, 129.2105, 4.0, Korean),
            food("숙영식당 (Sukyoung Sikdang)", 35.8362, 129.2085, 4.2, Korean),
        ],
    },
    City {
        id: CityId::Jeonju,
        name: "전주 (Jeonju)",
        lat: 35.8242,
        lng: 127.148,
        spots: &[
            spot("전주 한옥마을 (Hanok Village)", 35.8147, 127.1526, History),
            spot("전동성당 (Jeondong Cathedral)", 35.8133, 127.1492, History),
            spot("경기전 (Gyeonggijeon Shrine)", 35.815, 127.149, History),
            spot("자만벽화마을 (Jaman Mural Village)", 35.8155, 127.1565, Activity),
            spot("남부시장 (Nambu Market)", 35.8118, 127.1475, Shopping),
        ],
        foods: &[
            food("한국집 (Hankook Jip)", 35.8152, 127.1495, 4.0, Korean),
            food("PNB 풍년제과 (PNB Bakery)", 35.8155, 127.1497, 4.2, Cafe),
            food("조점례 남문피순대 (Sundae)", 35.813, 127.1477, 4.3, Korean),
            food("가족회관 (Gajok Hoegwan)", 35.817, 127.1445, 4.1, Korean),
            food("베테랑 칼국수 (Veteran Kalguksu)", 35.8135, 127.1505, 4.4, Noodles),
        ],
    },
    City {
        id: CityId::Suwon,
        name: "수원 (Suwon)",
        lat: 37.2636,
        lng: 127.0286,
        spots: &[
            spot("수원화성 (Suwon Hwaseong)", 37.2851, 127.0197, History),
            spot("방화수류정 (Banghwasuryujeong)", 37.2889, 127.0199, Nature),
            spot("스타필드 수원 (Starfield Suwon)", 37.2922, 126.9934, Shopping),
            spot("화성행궁 (Hwaseong Haenggung)", 37.2825, 127.0163, History),
            spot("플라잉수원 (Flying Suwon)", 37.2905, 127.022, Activity),
        ],
        foods: &[
            food("가보정 (Gabojeong BBQ)", 37.2764, 127.0298, 4.6, Barbecue),
            food("보영만두 (Boyoung Mandu)", 37.2862, 127.0152, 4.1, Noodles),
            food("정지영커피로스터즈", 37.2844, 127.0163, 4.3, Cafe),
            food("연포갈비 (Yeonpo Galbi)", 37.2885, 127.018, 4.2, Barbecue),
            food("진미통닭 (Jinmi Chicken)", 37.2755, 127.0175, 4.0, Barbecue),
        ],
    },
    City {
        id: CityId::Gangneung,
        name: "강릉 (Gangneung)",
        lat: 37.7519,
        lng: 128.876,
        spots: &[
            spot("경포대 (Gyeongpodae Pavilion)", 37.7951, 128.908, Nature),
            spot("안목해변 카페거리 (Coffee Street)", 37.7719, 128.9482, Shopping),
            spot("오죽헌 (Ojukheon)", 37.7792, 128.8794, History),
            spot("정동진역 (Jeongdongjin Station)", 37.6914, 129.0326, Nature),
            spot("아르떼뮤지엄 강릉 (Arte Museum)", 37.7905, 128.897, Activity),
        ],
        foods: &[
            food("동화가든 (Donghwa Garden)", 37.7915, 128.9146, 4.3, Korean),
            food("툇마루 커피 (Toenmaru Coffee)", 37.7923, 128.9161, 4.5, Cafe),
            food("강릉중앙시장 (Central Market)", 37.7538, 128.8986, 4.2, StreetFood),
            food("엄지네 포장마차 (Eomji's Cockle)", 37.7655, 128.9015, 4.4, Korean),
            food("강릉당 커피콩빵", 37.754, 128.8975, 4.0, Cafe),
        ],
    },
    City {
        id: CityId::Sokcho,
        name: "속초 (Sokcho)",
        lat: 38.207,
        lng: 128.5918,
        spots: &[
            spot("속초아이 (Sokcho Eye)", 38.1906, 128.6033, Activity),
            spot("설악산 케이블카 (Seoraksan Cable Car)", 38.1728, 128.4877, Nature),
            spot("영금정 (Yeonggeumjeong)", 38.2118, 128.6015, NightView),
            spot("속초해수욕장 (Sokcho Beach)", 38.1903, 128.603, Nature),
            spot("아바이마을 (Abai Village)", 38.2025, 128.592, History),
        ],
        foods: &[
            food("만석닭강정 (Manseok Chicken)", 38.2036, 128.5866, 4.1, StreetFood),
            food("봉포머구리집 (Seafood)", 38.2215, 128.5962, 4.2, Korean),
            food("88생선구이 (88 Grilled Fish)", 38.2045, 128.5905, 4.0, Korean),
            food("단천식당 (Abai Sundae)", 38.2028, 128.5925, 4.3, Korean),
            food("칠성조선소 (Chilsung Boatyard Cafe)", 38.197, 128.586, 4.5, Cafe),
        ],
    },
    City {
        id: CityId::Daegu,
        name: "대구 (Daegu)",
        lat: 35.8714,
        lng: 128.6014,
        spots: &[
            spot("김광석 거리 (Kim Kwang-seok St)", 35.8606, 128.6079, Activity),
            spot("수성못 (Suseongmot Lake)", 35.8285, 128.6166, Nature),
            spot("이월드 & 83타워", 35.8532, 128.5636, NightView),
            spot("서문시장 (Seomun Market)", 35.869, 128.5815, Shopping),
            spot("앞산 전망대 (Apsan Observatory)", 35.8275, 128.5775, NightView),
        ],
        foods: &[
            food("미성당 납작만두 (Flat Dumplings)", 35.8633, 128.5843, 3.9, StreetFood),
            food("걸리버 막창 (Gulliver Makchang)", 35.8856, 128.583, 4.4, Barbecue),
            food("삼송빵집 (Samsong Bakery)", 35.8698, 128.5954, 4.1, Cafe),
            food("중앙떡볶이 (Jungang Tteokbokki)", 35.8705, 128.595, 4.2, StreetFood),
            food("안지랑 곱창골목 (Anjirang Alley)", 35.8365, 128.575, 4.3, Barbecue),
        ],
    },
    City {
        id: CityId::Yeosu,
        name: "여수 (Yeosu)",
        lat: 34.7604,
        lng: 127.6622,
        spots: &[
            spot("여수 해상케이블카 (Cable Car)", 34.7439, 127.7456, Activity),
            spot("오동도 (Odongdo Island)", 34.746, 127.7667, Nature),
            spot("돌산공원 (Dolsan Park)", 34.7303, 127.7461, NightView),
            spot("이순신 광장 (Yi Sun-sin Square)", 34.7395, 127.7355, History),
            spot("아쿠아플라넷 여수 (Aqua Planet)", 34.745, 127.7405, Activity),
        ],
        foods: &[
            food("여수낭만포차 (Romantic Pocha)", 34.7391, 127.7389, 3.8, StreetFood),
            food("돌산게장명가 (Crab Marinated)", 34.7225, 127.7661, 4.3, Korean),
            food("여수당 (Yeosudang Baguette)", 34.742, 127.7335, 4.0, StreetFood),
            food("백천선어 (Sashimi)", 34.755, 127.725, 4.5, Korean),
            food("로타리식당 (Rotary Sikdang)", 34.7415, 127.7315, 4.2, Korean),
        ],
    },
];
