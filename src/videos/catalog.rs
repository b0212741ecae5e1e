//! Built-in video catalog entries, in presentation order.

use super::{Video, VideoTarget};

pub(crate) const VIDEOS: &[Video] = &[
    Video {
        id: "BqvYsPAufB8",
        title: "DUCK CHESS",
        author: "Eric Rosen",
        tags: &["Duck", "Howto"],
        target: VideoTarget::Beginner,
        duration: "19:01",
    },
    Video {
        id: "k20Civy_a3E",
        title: "First duck chess arena on pychess [HIGHLIGHTS]",
        author: "PyChess",
        tags: &["Duck", "Tournament"],
        target: VideoTarget::Intermediate,
        duration: "23:47",
    },
    Video {
        id: "Xeil4C9rU34",
        title: "Speedrun vs NEW Duck Chess A.I.",
        author: "Eric Rosen",
        tags: &["Duck", "Tactics"],
        target: VideoTarget::Beginner,
        duration: "33:00",
    },
    Video {
        id: "Qddn3o6yX_M",
        title: "Chak (Mayan Chess) - How to play",
        author: "PyChess",
        tags: &["Howto"],
        target: VideoTarget::Beginner,
        duration: "14:27",
    },
    Video {
        id: "Vyc4Llxgke8",
        title: "Introduction to the PyChess Website",
        author: "PyChess",
        tags: &["Introduction"],
        target: VideoTarget::Beginner,
        duration: "20:48",
    },
    Video {
        id: "WmMw97hp8C0",
        title: "Makpong, Ouk Chatrang (Cambodian Chess), and ASEAN Chess - How to play",
        author: "PyChess",
        tags: &["Howto", "Makruk"],
        target: VideoTarget::Beginner,
        duration: "5:26",
    },
    Video {
        id: "LWl8nMYrONM",
        title: "How to checkmate with 2 knights (in Hoppel-Poppel)",
        author: "PyChess",
        tags: &["Endgame", "Puzzle"],
        target: VideoTarget::Intermediate,
        duration: "13:36",
    },
    Video {
        id: "wzxgy2qJMwM",
        title: "The weirdest bug in the history of pychess (how to play placement chess)",
        author: "PyChess",
        tags: &["Placement", "Opening", "Puzzle"],
        target: VideoTarget::Intermediate,
        duration: "14:20",
    },
    Video {
        id: "hLv7kJQWukg",
        title: "King vs king endgame (in Synochess and Empire)",
        author: "PyChess",
        tags: &["Endgame", "Puzzle"],
        target: VideoTarget::Intermediate,
        duration: "9:58",
    },
    Video {
        id: "uyNsTgo8ylI",
        title: "Makruk (Thai Chess) - How to play",
        author: "PyChess",
        tags: &["Howto", "Makruk"],
        target: VideoTarget::Beginner,
        duration: "6:19",
    },
    Video {
        id: "p1WEdE3TdM8",
        title: "如果你一直想找個集分析、對奕、競技於一身的網站，那這隻影片將帶給你Pychess這個好地方。",
        author: "PyChess",
        tags: &["Introduction"],
        target: VideoTarget::Beginner,
        duration: "30:05",
    },
    Video {
        id: "0HqKri2R5ls",
        title: "Empire Chess - How to play",
        author: "PyChess",
        tags: &["Howto"],
        target: VideoTarget::Beginner,
        duration: "6:32",
    },
    Video {
        id: "Ap4mGkR8HDA",
        title: "Orda Chess (and Mirror) - How to play",
        author: "PyChess",
        tags: &["Howto"],
        target: VideoTarget::Beginner,
        duration: "11:15",
    },
    Video {
        id: "5f9QKK7cm20",
        title: "Tori Shogi - How to play",
        author: "PyChess",
        tags: &["Howto"],
        target: VideoTarget::Beginner,
        duration: "12:14",
    },
    Video {
        id: "YH63AlxpXkg",
        title: "Shogi - How to play (using internationalized piece set)",
        author: "PyChess",
        tags: &["Howto", "Shogi"],
        target: VideoTarget::Beginner,
        duration: "17:40",
    },
    Video {
        id: "KDkF2dEt41g",
        title: "Janggi (Korean Chess) - How to play (using internationalized piece set)",
        author: "PyChess",
        tags: &["Howto", "Janggi"],
        target: VideoTarget::Beginner,
        duration: "17:13",
    },
    Video {
        id: "e4jYQ0UMmGk",
        title: "Hybrid Piece Basics",
        author: "PyChess",
        tags: &["Fundamentals", "Tactics"],
        target: VideoTarget::Beginner,
        duration: "9:02",
    },
    Video {
        id: "WRk3ZbX2bpA",
        title: "Shogun Chess - How to play",
        author: "PyChess",
        tags: &["Howto"],
        target: VideoTarget::Beginner,
        duration: "4:37",
    },
    Video {
        id: "E6AzOO4-340",
        title: "S-Chess (Seiwaran Chess, SHARPER Chess) - How to play",
        author: "PyChess",
        tags: &["Howto", "S-Chess"],
        target: VideoTarget::Beginner,
        duration: "3:02",
    },
    Video {
        id: "CRrncO-w524",
        title: "Grand Chess - How to play",
        author: "PyChess",
        tags: &["Howto"],
        target: VideoTarget::Beginner,
        duration: "2:06",
    },
    Video {
        id: "c8nZQiq6VgY",
        title: "CAPABLANCA CHESS",
        author: "ChessNetwork",
        tags: &["Howto", "Capablanca"],
        target: VideoTarget::Intermediate,
        duration: "16:23",
    },
    Video {
        id: "HNYWioiltH0",
        title: "Capablanca Chess - How to Play",
        author: "PyChess",
        tags: &["Howto", "Capablanca"],
        target: VideoTarget::Beginner,
        duration: "6:18",
    },
    Video {
        id: "boT1qyDA5RA",
        title: "Xiangqi Basics",
        author: "PyChess",
        tags: &["Xiangqi", "Opening", "Endgame"],
        target: VideoTarget::Beginner,
        duration: "16:53",
    },
    Video {
        id: "5EDG5RP8OZ8",
        title: "Xiangqi (Chinese Chess) - How to play (Using Internationalized Piece Set)",
        author: "PyChess",
        tags: &["Xiangqi", "Howto"],
        target: VideoTarget::Beginner,
        duration: "8:13",
    },
    Video {
        id: "ujWzsxm18aQ",
        title: "Seirawan-Sharper Chess introduction with GM Yasser and JannLee",
        author: "JannLee Crazyhouse",
        tags: &["Howto", "S-Chess"],
        target: VideoTarget::Beginner,
        duration: "2:27:11",
    },
    Video {
        id: "tSXZbbeR-kU",
        title: "GM Yasser Seirawan Introduces S-Chess!",
        author: "chessbrah",
        tags: &["S-Chess", "Puzzle", "Endgame"],
        target: VideoTarget::Intermediate,
        duration: "1:27:55",
    },
    Video {
        id: "-b91uceklhM",
        title: "หมากรุกไทย: เว็บใหม่มาเเรง Pychess.org (มีเอไอให้เล่นฟรี)",
        author: "หมากรุกไทย ฆราวาสผู้ใฝ่รู้",
        tags: &["Introduction"],
        target: VideoTarget::Beginner,
        duration: "15:10",
    },
    Video {
        id: "xw6NpYeuozQ",
        title: "Crazyhouse 960 - opperwezen vs JannLee (Series 3)",
        author: "JannLee Crazyhouse",
        tags: &["Match"],
        target: VideoTarget::Advanced,
        duration: "1:50:52",
    },
    Video {
        id: "WCJZj6szAJk",
        title: "Xiangqi opening principles - and why they differ from chess",
        author: "Xiangqi Chinese Chess",
        tags: &["Xiangqi", "Fundamentals", "Opening"],
        target: VideoTarget::Beginner,
        duration: "32:35",
    },
    Video {
        id: "-DHY3xhB0aE",
        title: "European Grandmaster Joep Nabuurs' #1 Tip for Chess Players Trying to Improve at Xiangqi",
        author: "Xiangqi Chinese Chess",
        tags: &["Xiangqi"],
        target: VideoTarget::Intermediate,
        duration: "12:47",
    },
    Video {
        id: "pX_ZDjeqlJs",
        title: "Janggi - basic opening principles",
        author: "Shogi TV",
        tags: &["Janggi", "Opening"],
        target: VideoTarget::Beginner,
        duration: "21:18",
    },
    Video {
        id: "-4ETYXWLEXs",
        title: "Round1",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "39:50",
    },
    Video {
        id: "WALKTGnkrYM",
        title: "Round2",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "32:13",
    },
    Video {
        id: "wWEvpvct8QQ",
        title: "Round3",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "35:50",
    },
    Video {
        id: "INYX4zIoDOY",
        title: "Round4",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "36:50",
    },
    Video {
        id: "iqHXpdsyVYM",
        title: "Round5",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "1:12:16",
    },
    Video {
        id: "MEmptahUlgI",
        title: "Round6",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "47:28",
    },
    Video {
        id: "lXRKxfXxsHk",
        title: "Round7",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "41:02",
    },
    Video {
        id: "W9ccSduSw6Q",
        title: "Final blitz decider and results",
        author: "Janggi France - 제르제레미",
        tags: &["Janggi", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "20:38",
    },
    Video {
        id: "QnkQW7ICj3Y",
        title: "Shogi Exercise #1 - Pawn Tactics",
        author: "HIDETCHI",
        tags: &["Shogi", "Tactics"],
        target: VideoTarget::Beginner,
        duration: "10:17",
    },
    Video {
        id: "PKRdiUIwVwg",
        title: "Shogi Exercise #2 - Pawn Tactics",
        author: "HIDETCHI",
        tags: &["Shogi", "Tactics"],
        target: VideoTarget::Beginner,
        duration: "10:17",
    },
    Video {
        id: "YH2RAJo6Z-4",
        title: "Xiangqi Grand Master Profile Hu Ronghua with ENGLISH Subtitles",
        author: "Snail's Wild World of Xiangqi Chinese Chess",
        tags: &["Xiangqi", "Hu Ronghua"],
        target: VideoTarget::Beginner,
        duration: "25:31",
    },
    Video {
        id: "-1jXt-QbuEA",
        title: "A Concept in Xiangqi Opening",
        author: "Singapore Xiangqi Academy",
        tags: &["Xiangqi", "Opening"],
        target: VideoTarget::Beginner,
        duration: "9:08",
    },
    Video {
        id: "IFKSuw2rthE",
        title: "Janggi - Mate in 3 (or 2) Puzzles",
        author: "Amphibian Hoplite",
        tags: &["Janggi", "Puzzle"],
        target: VideoTarget::Beginner,
        duration: "10:01",
    },
    Video {
        id: "btgiwpo9c4s",
        title: "Opening 1 Be mindful of piece advantage and activity",
        author: "JapanShogiAssociation",
        tags: &["Shogi", "Opening"],
        target: VideoTarget::Beginner,
        duration: "13:56",
    },
    Video {
        id: "qmeUX4_2oKo",
        title: "Opening 2 4th File Rook Basics",
        author: "JapanShogiAssociation",
        tags: &["Shogi", "Opening"],
        target: VideoTarget::Beginner,
        duration: "10:05",
    },
    Video {
        id: "KYTlNhk2KSk",
        title: "Middlegame 1 Piece values and basic tactics",
        author: "JapanShogiAssociation",
        tags: &["Shogi", "Middlegame"],
        target: VideoTarget::Beginner,
        duration: "13:08",
    },
    Video {
        id: "-ooJdh8orE0",
        title: "Middlegame 2 Let's fight using material advantage. How to gain and not lose pieces.",
        author: "JapanShogiAssociation",
        tags: &["Shogi", "Middlegame"],
        target: VideoTarget::Beginner,
        duration: "12:53",
    },
    Video {
        id: "7ngWaevzYxw",
        title: "Endgame 1 Let's learn checkmate patterns",
        author: "JapanShogiAssociation",
        tags: &["Shogi", "Endgame"],
        target: VideoTarget::Beginner,
        duration: "13:20",
    },
    Video {
        id: "0HFxYYAXVXY",
        title: "Endgame 2 How to defend against a check",
        author: "JapanShogiAssociation",
        tags: &["Shogi", "Endgame"],
        target: VideoTarget::Beginner,
        duration: "13:55",
    },
    Video {
        id: "mrUZ3Slwf9Y",
        title: "Endgame 3 Mutual attack - fight for each move",
        author: "JapanShogiAssociation",
        tags: &["Shogi", "Endgame"],
        target: VideoTarget::Beginner,
        duration: "17:59",
    },
    Video {
        id: "950nyyjOirU",
        title: "25 Xiangqi Checkmate Strategies (Part 1) | Chinese Chess game tips for beginners",
        author: "Xiangqi Chinese Chess",
        tags: &["Xiangqi", "Tactics"],
        target: VideoTarget::Beginner,
        duration: "10:50",
    },
    Video {
        id: "MyLXgkL4C5A",
        title: "The Most Popular Openings in Xiangqi | An Intro to the Chinese Chess Opening",
        author: "Xiangqi Chinese Chess",
        tags: &["Xiangqi", "Opening"],
        target: VideoTarget::Beginner,
        duration: "11:27",
    },
    Video {
        id: "yi6qNq5Uaww",
        title: "1st Capablanca Chess Arena",
        author: "ChessNetwork",
        tags: &["Capablanca", "Tournament"],
        target: VideoTarget::Beginner,
        duration: "57:52",
    },
    Video {
        id: "82U8LR6MSV0",
        title: "Aesthetics of game : shogi, Japanese traditional culture",
        author: "ANA Global Channel",
        tags: &["Shogi", "Yoshiharu Habu"],
        target: VideoTarget::Beginner,
        duration: "9:46",
    },
];
