//! Locale rows, keyed by place name.

use crate::locale::Locale;

pub(crate) static LOCALES: &[Locale] = &[
    Locale::new("Seattle", "Seattle, Washington", 47.6061, -122.3328, "America/Los_Angeles"),
    Locale::new("Portland", "Portland, Oregon", 45.5152, -122.6784, "America/Los_Angeles"),
    Locale::new("San Francisco", "San Francisco, California", 37.7749, -122.4194, "America/Los_Angeles"),
    Locale::new("Los Angeles", "Los Angeles, California", 34.0522, -118.2437, "America/Los_Angeles"),
    Locale::new("San Diego", "San Diego, California", 32.7157, -117.1611, "America/Los_Angeles"),
    Locale::new("Las Vegas", "Las Vegas, Nevada", 36.1699, -115.1398, "America/Los_Angeles"),
    Locale::new("Phoenix", "Phoenix, Arizona", 33.4484, -112.074, "America/Phoenix"),
    Locale::new("Denver", "Denver, Colorado", 39.7392, -104.9903, "America/Denver"),
    Locale::new("Salt Lake City", "Salt Lake City, Utah", 40.7608, -111.891, "America/Denver"),
    Locale::new("Albuquerque", "Albuquerque, New Mexico", 35.0844, -106.6504, "America/Denver"),
    Locale::new("Chicago", "Chicago, Illinois", 41.8781, -87.6298, "America/Chicago"),
    Locale::new("Dallas", "Dallas, Texas", 32.7767, -96.797, "America/Chicago"),
    Locale::new("Houston", "Houston, Texas", 29.7604, -95.3698, "America/Chicago"),
    Locale::new("Austin", "Austin, Texas", 30.2672, -97.7431, "America/Chicago"),
    Locale::new("New Orleans", "New Orleans, Louisiana", 29.9511, -90.0715, "America/Chicago"),
    Locale::new("Nashville", "Nashville, Tennessee", 36.1627, -86.7816, "America/Chicago"),
    Locale::new("Minneapolis", "Minneapolis, Minnesota", 44.9778, -93.265, "America/Chicago"),
    Locale::new("Kansas City", "Kansas City, Missouri", 39.0997, -94.5786, "America/Chicago"),
    Locale::new("Oklahoma City", "Oklahoma City, Oklahoma", 35.4676, -97.5164, "America/Chicago"),
    Locale::new("New York", "New York City, New York", 40.7128, -74.006, "America/New_York"),
    Locale::new("Boston", "Boston, Massachusetts", 42.3601, -71.0589, "America/New_York"),
    Locale::new("Washington", "Washington, D.C.", 38.9072, -77.0369, "America/New_York"),
    Locale::new("Philadelphia", "Philadelphia, Pennsylvania", 39.9526, -75.1652, "America/New_York"),
    Locale::new("Atlanta", "Atlanta, Georgia", 33.749, -84.388, "America/New_York"),
    Locale::new("Miami", "Miami, Florida", 25.7617, -80.1918, "America/New_York"),
    Locale::new("Orlando", "Orlando, Florida", 28.5383, -81.3792, "America/New_York"),
    Locale::new("Tampa", "Tampa, Florida", 27.9506, -82.4572, "America/New_York"),
    Locale::new("Charlotte", "Charlotte, North Carolina", 35.2271, -80.8431, "America/New_York"),
    Locale::new("Detroit", "Detroit, Michigan", 42.3314, -83.0458, "America/New_York"),
    Locale::new("Cleveland", "Cleveland, Ohio", 41.4993, -81.6944, "America/New_York"),
    Locale::new("Pittsburgh", "Pittsburgh, Pennsylvania", 40.4406, -79.9959, "America/New_York"),
    Locale::new("Baltimore", "Baltimore, Maryland", 39.2904, -76.6122, "America/New_York"),
    Locale::new("Richmond", "Richmond, Virginia", 37.5407, -77.436, "America/New_York"),
    Locale::new("Alaska", "Alaska, USA", 61.2181, -149.9003, "America/Anchorage"),
    Locale::new("Hawaii", "Hawaii, USA", 21.3099, -157.8581, "Pacific/Honolulu"),
    Locale::new("California", "California, USA", 38.5816, -121.4944, "America/Los_Angeles"),
    Locale::new("Texas", "Texas, USA", 30.2672, -97.7431, "America/Chicago"),
    Locale::new("Florida", "Florida, USA", 30.4518, -84.2807, "America/New_York"),
    Locale::new("New York State", "New York State, USA", 42.6526, -73.7562, "America/New_York"),
    Locale::new("Vancouver", "Vancouver, British Columbia", 49.2827, -123.1207, "America/Vancouver"),
    Locale::new("Calgary", "Calgary, Alberta", 51.0447, -114.0719, "America/Edmonton"),
    Locale::new("Edmonton", "Edmonton, Alberta", 53.5461, -113.4938, "America/Edmonton"),
    Locale::new("Winnipeg", "Winnipeg, Manitoba", 49.8951, -97.1384, "America/Winnipeg"),
    Locale::new("Toronto", "Toronto, Ontario", 43.6532, -79.3832, "America/Toronto"),
    Locale::new("Ottawa", "Ottawa, Ontario", 45.4215, -75.6972, "America/Toronto"),
    Locale::new("Montreal", "Montreal, Quebec", 45.5017, -73.5673, "America/Toronto"),
    Locale::new("Quebec City", "Quebec City, Quebec", 46.8139, -71.208, "America/Toronto"),
    Locale::new("Halifax", "Halifax, Nova Scotia", 44.6488, -63.5752, "America/Halifax"),
    Locale::new("St. John's", "St. John's, Newfoundland", 47.5615, -52.7126, "America/St_Johns"),
    Locale::new("Mexico City", "Mexico City, Mexico", 19.4326, -99.1332, "America/Mexico_City"),
    Locale::new("Guadalajara", "Guadalajara, Mexico", 20.6597, -103.3496, "America/Mexico_City"),
    Locale::new("Cancun", "Cancun, Mexico", 21.1619, -86.8515, "America/Cancun"),
    Locale::new("Tijuana", "Tijuana, Mexico", 32.5149, -117.0382, "America/Tijuana"),
    Locale::new("Puerto Vallarta", "Puerto Vallarta, Mexico", 20.6534, -105.2253, "America/Mexico_City"),
    Locale::new("Guatemala City", "Guatemala City, Guatemala", 14.6349, -90.5069, "America/Guatemala"),
    Locale::new("San Jose", "San José, Costa Rica", 9.9281, -84.0907, "America/Costa_Rica"),
    Locale::new("Panama City", "Panama City, Panama", 8.9824, -79.5199, "America/Panama"),
    Locale::new("Havana", "Havana, Cuba", 23.1136, -82.3666, "America/Havana"),
    Locale::new("Kingston", "Kingston, Jamaica", 17.9712, -76.7936, "America/Jamaica"),
    Locale::new("San Juan", "San Juan, Puerto Rico", 18.4655, -66.1057, "America/Puerto_Rico"),
    Locale::new("Nassau", "Nassau, Bahamas", 25.0443, -77.3504, "America/Nassau"),
    Locale::new("Barbados", "Bridgetown, Barbados", 13.1939, -59.5432, "America/Barbados"),
    Locale::new("Bogota", "Bogotá, Colombia", 4.711, -74.0721, "America/Bogota"),
    Locale::new("Caracas", "Caracas, Venezuela", 10.4806, -66.9036, "America/Caracas"),
    Locale::new("Georgetown", "Georgetown, Guyana", 6.8013, -58.1551, "America/Guyana"),
    Locale::new("Paramaribo", "Paramaribo, Suriname", 5.852, -55.2038, "America/Paramaribo"),
    Locale::new("Quito", "Quito, Ecuador", -0.1807, -78.4678, "America/Guayaquil"),
    Locale::new("Lima", "Lima, Peru", -12.0464, -77.0428, "America/Lima"),
    Locale::new("La Paz", "La Paz, Bolivia", -16.5, -68.15, "America/La_Paz"),
    Locale::new("Santiago", "Santiago, Chile", -33.4489, -70.6693, "America/Santiago"),
    Locale::new("Buenos Aires", "Buenos Aires, Argentina", -34.6118, -58.396, "America/Argentina/Buenos_Aires"),
    Locale::new("Montevideo", "Montevideo, Uruguay", -34.9011, -56.1645, "America/Montevideo"),
    Locale::new("Asuncion", "Asunción, Paraguay", -25.2637, -57.5759, "America/Asuncion"),
    Locale::new("Brasilia", "Brasília, Brazil", -15.8267, -47.9218, "America/Sao_Paulo"),
    Locale::new("Rio de Janeiro", "Rio de Janeiro, Brazil", -22.9068, -43.1729, "America/Sao_Paulo"),
    Locale::new("Sao Paulo", "São Paulo, Brazil", -23.5505, -46.6333, "America/Sao_Paulo"),
    Locale::new("Manaus", "Manaus, Brazil", -3.119, -60.0217, "America/Manaus"),
    Locale::new("London", "London, United Kingdom", 51.5074, -0.1278, "Europe/London"),
    Locale::new("Edinburgh", "Edinburgh, Scotland", 55.9533, -3.1883, "Europe/London"),
    Locale::new("Dublin", "Dublin, Ireland", 53.3498, -6.2603, "Europe/Dublin"),
    Locale::new("Paris", "Paris, France", 48.8566, 2.3522, "Europe/Paris"),
    Locale::new("Lyon", "Lyon, France", 45.764, 4.8357, "Europe/Paris"),
    Locale::new("Nice", "Nice, France", 43.7102, 7.262, "Europe/Paris"),
    Locale::new("Madrid", "Madrid, Spain", 40.4168, -3.7038, "Europe/Madrid"),
    Locale::new("Barcelona", "Barcelona, Spain", 41.3851, 2.1734, "Europe/Madrid"),
    Locale::new("Seville", "Seville, Spain", 37.3891, -5.9845, "Europe/Madrid"),
    Locale::new("Lisbon", "Lisbon, Portugal", 38.7223, -9.1393, "Europe/Lisbon"),
    Locale::new("Porto", "Porto, Portugal", 41.1579, -8.6291, "Europe/Lisbon"),
    Locale::new("Rome", "Rome, Italy", 41.9028, 12.4964, "Europe/Rome"),
    Locale::new("Milan", "Milan, Italy", 45.4642, 9.19, "Europe/Rome"),
    Locale::new("Venice", "Venice, Italy", 45.4408, 12.3155, "Europe/Rome"),
    Locale::new("Florence", "Florence, Italy", 43.7696, 11.2558, "Europe/Rome"),
    Locale::new("Naples", "Naples, Italy", 40.8518, 14.2681, "Europe/Rome"),
    Locale::new("Amsterdam", "Amsterdam, Netherlands", 52.3676, 4.9041, "Europe/Amsterdam"),
    Locale::new("Brussels", "Brussels, Belgium", 50.8503, 4.3517, "Europe/Brussels"),
    Locale::new("Luxembourg", "Luxembourg City, Luxembourg", 49.6116, 6.1319, "Europe/Luxembourg"),
    Locale::new("Bern", "Bern, Switzerland", 46.9481, 7.4474, "Europe/Zurich"),
    Locale::new("Zurich", "Zurich, Switzerland", 47.3769, 8.5417, "Europe/Zurich"),
    Locale::new("Geneva", "Geneva, Switzerland", 46.2044, 6.1432, "Europe/Zurich"),
    Locale::new("Vienna", "Vienna, Austria", 48.2082, 16.3738, "Europe/Vienna"),
    Locale::new("Salzburg", "Salzburg, Austria", 47.8095, 13.055, "Europe/Vienna"),
    Locale::new("Copenhagen", "Copenhagen, Denmark", 55.6761, 12.5683, "Europe/Copenhagen"),
    Locale::new("Stockholm", "Stockholm, Sweden", 59.3293, 18.0686, "Europe/Stockholm"),
    Locale::new("Oslo", "Oslo, Norway", 59.9139, 10.7522, "Europe/Oslo"),
    Locale::new("Bergen", "Bergen, Norway", 60.3913, 5.3221, "Europe/Oslo"),
    Locale::new("Helsinki", "Helsinki, Finland", 60.1699, 24.9384, "Europe/Helsinki"),
    Locale::new("Reykjavik", "Reykjavík, Iceland", 64.1466, -21.9426, "Atlantic/Reykjavik"),
    Locale::new("Berlin", "Berlin, Germany", 52.52, 13.405, "Europe/Berlin"),
    Locale::new("Munich", "Munich, Germany", 48.1351, 11.582, "Europe/Berlin"),
    Locale::new("Hamburg", "Hamburg, Germany", 53.5511, 9.9937, "Europe/Berlin"),
    Locale::new("Frankfurt", "Frankfurt, Germany", 50.1109, 8.6821, "Europe/Berlin"),
    Locale::new("Prague", "Prague, Czech Republic", 50.0755, 14.4378, "Europe/Prague"),
    Locale::new("Budapest", "Budapest, Hungary", 47.4979, 19.0402, "Europe/Budapest"),
    Locale::new("Warsaw", "Warsaw, Poland", 52.2297, 21.0122, "Europe/Warsaw"),
    Locale::new("Krakow", "Kraków, Poland", 50.0647, 19.945, "Europe/Warsaw"),
    Locale::new("Bratislava", "Bratislava, Slovakia", 48.1486, 17.1077, "Europe/Bratislava"),
    Locale::new("Ljubljana", "Ljubljana, Slovenia", 46.0569, 14.5058, "Europe/Ljubljana"),
    Locale::new("Zagreb", "Zagreb, Croatia", 45.815, 15.9819, "Europe/Zagreb"),
    Locale::new("Belgrade", "Belgrade, Serbia", 44.7866, 20.4489, "Europe/Belgrade"),
    Locale::new("Sarajevo", "Sarajevo, Bosnia and Herzegovina", 43.8486, 18.3564, "Europe/Sarajevo"),
    Locale::new("Sofia", "Sofia, Bulgaria", 42.6977, 23.3219, "Europe/Sofia"),
    Locale::new("Bucharest", "Bucharest, Romania", 44.4268, 26.1025, "Europe/Bucharest"),
    Locale::new("Kiev", "Kyiv, Ukraine", 50.4501, 30.5234, "Europe/Kiev"),
    Locale::new("Moscow", "Moscow, Russia", 55.7558, 37.6176, "Europe/Moscow"),
    Locale::new("St. Petersburg", "St. Petersburg, Russia", 59.9311, 30.3609, "Europe/Moscow"),
    Locale::new("Athens", "Athens, Greece", 37.9838, 23.7275, "Europe/Athens"),
    Locale::new("Thessaloniki", "Thessaloniki, Greece", 40.6401, 22.9444, "Europe/Athens"),
    Locale::new("Istanbul", "Istanbul, Turkey", 41.0082, 28.9784, "Europe/Istanbul"),
    Locale::new("Ankara", "Ankara, Turkey", 39.9334, 32.8597, "Europe/Istanbul"),
    Locale::new("Valletta", "Valletta, Malta", 35.8989, 14.5146, "Europe/Malta"),
    Locale::new("Nicosia", "Nicosia, Cyprus", 35.1856, 33.3823, "Asia/Nicosia"),
    Locale::new("Cairo", "Cairo, Egypt", 30.0444, 31.2357, "Africa/Cairo"),
    Locale::new("Alexandria", "Alexandria, Egypt", 31.2001, 29.9187, "Africa/Cairo"),
    Locale::new("Tunis", "Tunis, Tunisia", 36.8065, 10.1815, "Africa/Tunis"),
    Locale::new("Algiers", "Algiers, Algeria", 36.7538, 3.0588, "Africa/Algiers"),
    Locale::new("Rabat", "Rabat, Morocco", 34.0209, -6.8416, "Africa/Casablanca"),
    Locale::new("Casablanca", "Casablanca, Morocco", 33.5731, -7.5898, "Africa/Casablanca"),
    Locale::new("Marrakech", "Marrakech, Morocco", 31.6295, -7.9811, "Africa/Casablanca"),
    Locale::new("Lagos", "Lagos, Nigeria", 6.5244, 3.3792, "Africa/Lagos"),
    Locale::new("Abuja", "Abuja, Nigeria", 9.0579, 7.4951, "Africa/Lagos"),
    Locale::new("Accra", "Accra, Ghana", 5.6037, -0.187, "Africa/Accra"),
    Locale::new("Dakar", "Dakar, Senegal", 14.7167, -17.4677, "Africa/Dakar"),
    Locale::new("Bamako", "Bamako, Mali", 12.6392, -8.0029, "Africa/Bamako"),
    Locale::new("Addis Ababa", "Addis Ababa, Ethiopia", 9.145, 38.7451, "Africa/Addis_Ababa"),
    Locale::new("Nairobi", "Nairobi, Kenya", -1.2921, 36.8219, "Africa/Nairobi"),
    Locale::new("Kampala", "Kampala, Uganda", 0.3476, 32.5825, "Africa/Kampala"),
    Locale::new("Dar es Salaam", "Dar es Salaam, Tanzania", -6.7924, 39.2083, "Africa/Dar_es_Salaam"),
    Locale::new("Kigali", "Kigali, Rwanda", -1.9441, 30.0619, "Africa/Kigali"),
    Locale::new("Kinshasa", "Kinshasa, Democratic Republic of Congo", -4.4419, 15.2663, "Africa/Kinshasa"),
    Locale::new("Luanda", "Luanda, Angola", -8.839, 13.2894, "Africa/Luanda"),
    Locale::new("Johannesburg", "Johannesburg, South Africa", -26.2041, 28.0473, "Africa/Johannesburg"),
    Locale::new("Cape Town", "Cape Town, South Africa", -33.9249, 18.4241, "Africa/Johannesburg"),
    Locale::new("Durban", "Durban, South Africa", -29.8587, 31.0218, "Africa/Johannesburg"),
    Locale::new("Harare", "Harare, Zimbabwe", -17.8252, 31.0335, "Africa/Harare"),
    Locale::new("Lusaka", "Lusaka, Zambia", -15.3875, 28.3228, "Africa/Lusaka"),
    Locale::new("Gaborone", "Gaborone, Botswana", -24.6282, 25.9231, "Africa/Gaborone"),
    Locale::new("Windhoek", "Windhoek, Namibia", -22.5597, 17.0832, "Africa/Windhoek"),
    Locale::new("Antananarivo", "Antananarivo, Madagascar", -18.8792, 47.5079, "Indian/Antananarivo"),
    Locale::new("Riyadh", "Riyadh, Saudi Arabia", 24.7136, 46.6753, "Asia/Riyadh"),
    Locale::new("Jeddah", "Jeddah, Saudi Arabia", 21.4858, 39.1925, "Asia/Riyadh"),
    Locale::new("Mecca", "Mecca, Saudi Arabia", 21.3891, 39.8579, "Asia/Riyadh"),
    Locale::new("Dubai", "Dubai, United Arab Emirates", 25.2769, 55.2962, "Asia/Dubai"),
    Locale::new("Abu Dhabi", "Abu Dhabi, United Arab Emirates", 24.4539, 54.3773, "Asia/Dubai"),
    Locale::new("Doha", "Doha, Qatar", 25.2854, 51.531, "Asia/Qatar"),
    Locale::new("Kuwait City", "Kuwait City, Kuwait", 29.3117, 47.4818, "Asia/Kuwait"),
    Locale::new("Manama", "Manama, Bahrain", 26.0667, 50.5577, "Asia/Bahrain"),
    Locale::new("Muscat", "Muscat, Oman", 23.588, 58.3829, "Asia/Muscat"),
    Locale::new("Baghdad", "Baghdad, Iraq", 33.3152, 44.3661, "Asia/Baghdad"),
    Locale::new("Tehran", "Tehran, Iran", 35.6892, 51.389, "Asia/Tehran"),
    Locale::new("Isfahan", "Isfahan, Iran", 32.6546, 51.668, "Asia/Tehran"),
    Locale::new("Tel Aviv", "Tel Aviv, Israel", 32.0853, 34.7818, "Asia/Jerusalem"),
    Locale::new("Jerusalem", "Jerusalem, Israel", 31.7683, 35.2137, "Asia/Jerusalem"),
    Locale::new("Amman", "Amman, Jordan", 31.9454, 35.9284, "Asia/Amman"),
    Locale::new("Damascus", "Damascus, Syria", 33.5138, 36.2765, "Asia/Damascus"),
    Locale::new("Beirut", "Beirut, Lebanon", 33.8938, 35.5018, "Asia/Beirut"),
    Locale::new("Mumbai", "Mumbai, India", 19.076, 72.8777, "Asia/Kolkata"),
    Locale::new("Delhi", "Delhi, India", 28.7041, 77.1025, "Asia/Kolkata"),
    Locale::new("Bangalore", "Bangalore, India", 12.9716, 77.5946, "Asia/Kolkata"),
    Locale::new("Chennai", "Chennai, India", 13.0827, 80.2707, "Asia/Kolkata"),
    Locale::new("Kolkata", "Kolkata, India", 22.5726, 88.3639, "Asia/Kolkata"),
    Locale::new("Hyderabad", "Hyderabad, India", 17.385, 78.4867, "Asia/Kolkata"),
    Locale::new("Pune", "Pune, India", 18.5204, 73.8567, "Asia/Kolkata"),
    Locale::new("Jaipur", "Jaipur, India", 26.9124, 75.7873, "Asia/Kolkata"),
    Locale::new("Goa", "Goa, India", 15.2993, 74.124, "Asia/Kolkata"),
    Locale::new("Karachi", "Karachi, Pakistan", 24.8607, 67.0011, "Asia/Karachi"),
    Locale::new("Lahore", "Lahore, Pakistan", 31.5204, 74.3587, "Asia/Karachi"),
    Locale::new("Islamabad", "Islamabad, Pakistan", 33.6844, 73.0479, "Asia/Karachi"),
    Locale::new("Dhaka", "Dhaka, Bangladesh", 23.8103, 90.4125, "Asia/Dhaka"),
    Locale::new("Chittagong", "Chittagong, Bangladesh", 22.3569, 91.7832, "Asia/Dhaka"),
    Locale::new("Colombo", "Colombo, Sri Lanka", 6.9271, 79.8612, "Asia/Colombo"),
    Locale::new("Kandy", "Kandy, Sri Lanka", 7.2906, 80.6337, "Asia/Colombo"),
    Locale::new("Kathmandu", "Kathmandu, Nepal", 27.7172, 85.324, "Asia/Kathmandu"),
    Locale::new("Thimphu", "Thimphu, Bhutan", 27.4728, 89.639, "Asia/Thimphu"),
    Locale::new("Bangkok", "Bangkok, Thailand", 13.7563, 100.5018, "Asia/Bangkok"),
    Locale::new("Phuket", "Phuket, Thailand", 7.8804, 98.3923, "Asia/Bangkok"),
    Locale::new("Chiang Mai", "Chiang Mai, Thailand", 18.7883, 98.9853, "Asia/Bangkok"),
    Locale::new("Ho Chi Minh City", "Ho Chi Minh City, Vietnam", 10.8231, 106.6297, "Asia/Ho_Chi_Minh"),
    Locale::new("Hanoi", "Hanoi, Vietnam", 21.0285, 105.8542, "Asia/Ho_Chi_Minh"),
    Locale::new("Singapore", "Singapore", 1.3521, 103.8198, "Asia/Singapore"),
    Locale::new("Kuala Lumpur", "Kuala Lumpur, Malaysia", 3.139, 101.6869, "Asia/Kuala_Lumpur"),
    Locale::new("Penang", "Penang, Malaysia", 5.4164, 100.3327, "Asia/Kuala_Lumpur"),
    Locale::new("Jakarta", "Jakarta, Indonesia", -6.2088, 106.8456, "Asia/Jakarta"),
    Locale::new("Bali", "Bali, Indonesia", -8.4095, 115.1889, "Asia/Makassar"),
    Locale::new("Yogyakarta", "Yogyakarta, Indonesia", -7.7956, 110.3695, "Asia/Jakarta"),
    Locale::new("Manila", "Manila, Philippines", 14.5995, 120.9842, "Asia/Manila"),
    Locale::new("Cebu", "Cebu, Philippines", 10.3157, 123.8854, "Asia/Manila"),
    Locale::new("Vientiane", "Vientiane, Laos", 17.9757, 102.6331, "Asia/Vientiane"),
    Locale::new("Phnom Penh", "Phnom Penh, Cambodia", 11.5449, 104.8922, "Asia/Phnom_Penh"),
    Locale::new("Yangon", "Yangon, Myanmar", 16.8661, 96.1951, "Asia/Yangon"),
    Locale::new("Naypyidaw", "Naypyidaw, Myanmar", 19.7633, 96.0785, "Asia/Yangon"),
    Locale::new("Bandar Seri Begawan", "Bandar Seri Begawan, Brunei", 4.9031, 114.9398, "Asia/Brunei"),
    Locale::new("Dili", "Dili, East Timor", -8.5569, 125.5603, "Asia/Dili"),
    Locale::new("Beijing", "Beijing, China", 39.9042, 116.4074, "Asia/Shanghai"),
    Locale::new("Shanghai", "Shanghai, China", 31.2304, 121.4737, "Asia/Shanghai"),
    Locale::new("Guangzhou", "Guangzhou, China", 23.1291, 113.2644, "Asia/Shanghai"),
    Locale::new("Shenzhen", "Shenzhen, China", 22.5431, 114.0579, "Asia/Shanghai"),
    Locale::new("Hong Kong", "Hong Kong", 22.3193, 114.1694, "Asia/Hong_Kong"),
    Locale::new("Macau", "Macau", 22.1987, 113.5439, "Asia/Macau"),
    Locale::new("Chengdu", "Chengdu, China", 30.5728, 104.0668, "Asia/Shanghai"),
    Locale::new("Xi'an", "Xi'an, China", 34.3416, 108.9398, "Asia/Shanghai"),
    Locale::new("Hangzhou", "Hangzhou, China", 30.2741, 120.1551, "Asia/Shanghai"),
    Locale::new("Tokyo", "Tokyo, Japan", 35.6762, 139.6503, "Asia/Tokyo"),
    Locale::new("Osaka", "Osaka, Japan", 34.6937, 135.5023, "Asia/Tokyo"),
    Locale::new("Kyoto", "Kyoto, Japan", 35.0116, 135.7681, "Asia/Tokyo"),
    Locale::new("Hiroshima", "Hiroshima, Japan", 34.3853, 132.4553, "Asia/Tokyo"),
    Locale::new("Nagoya", "Nagoya, Japan", 35.1815, 136.9066, "Asia/Tokyo"),
    Locale::new("Sapporo", "Sapporo, Japan", 43.0642, 141.3469, "Asia/Tokyo"),
    Locale::new("Seoul", "Seoul, South Korea", 37.5665, 126.978, "Asia/Seoul"),
    Locale::new("Busan", "Busan, South Korea", 35.1796, 129.0756, "Asia/Seoul"),
    Locale::new("Incheon", "Incheon, South Korea", 37.4563, 126.7052, "Asia/Seoul"),
    Locale::new("Pyongyang", "Pyongyang, North Korea", 39.0392, 125.7625, "Asia/Pyongyang"),
    Locale::new("Taipei", "Taipei, Taiwan", 25.033, 121.5654, "Asia/Taipei"),
    Locale::new("Kaohsiung", "Kaohsiung, Taiwan", 22.6273, 120.3014, "Asia/Taipei"),
    Locale::new("Ulaanbaatar", "Ulaanbaatar, Mongolia", 47.8864, 106.9057, "Asia/Ulaanbaatar"),
    Locale::new("Sydney", "Sydney, Australia", -33.8688, 151.2093, "Australia/Sydney"),
    Locale::new("Melbourne", "Melbourne, Australia", -37.8136, 144.9631, "Australia/Melbourne"),
    Locale::new("Brisbane", "Brisbane, Australia", -27.4698, 153.0251, "Australia/Brisbane"),
    Locale::new("Perth", "Perth, Australia", -31.9505, 115.8605, "Australia/Perth"),
    Locale::new("Adelaide", "Adelaide, Australia", -34.9285, 138.6007, "Australia/Adelaide"),
    Locale::new("Canberra", "Canberra, Australia", -35.2809, 149.13, "Australia/Sydney"),
    Locale::new("Darwin", "Darwin, Australia", -12.4634, 130.8456, "Australia/Darwin"),
    Locale::new("Hobart", "Hobart, Australia", -42.8821, 147.3272, "Australia/Hobart"),
    Locale::new("Gold Coast", "Gold Coast, Australia", -28.0167, 153.4, "Australia/Brisbane"),
    Locale::new("Cairns", "Cairns, Australia", -16.9203, 145.7781, "Australia/Brisbane"),
    Locale::new("Auckland", "Auckland, New Zealand", -36.8485, 174.7633, "Pacific/Auckland"),
    Locale::new("Wellington", "Wellington, New Zealand", -41.2865, 174.7762, "Pacific/Auckland"),
    Locale::new("Christchurch", "Christchurch, New Zealand", -43.5321, 172.6362, "Pacific/Auckland"),
    Locale::new("Queenstown", "Queenstown, New Zealand", -45.0312, 168.6626, "Pacific/Auckland"),
    Locale::new("Suva", "Suva, Fiji", -18.1248, 178.4501, "Pacific/Fiji"),
    Locale::new("Nadi", "Nadi, Fiji", -17.7765, 177.4162, "Pacific/Fiji"),
    Locale::new("Port Moresby", "Port Moresby, Papua New Guinea", -9.4438, 147.1803, "Pacific/Port_Moresby"),
    Locale::new("Noumea", "Nouméa, New Caledonia", -22.2758, 166.4581, "Pacific/Noumea"),
    Locale::new("Papeete", "Papeete, French Polynesia", -17.5516, -149.5585, "Pacific/Tahiti"),
    Locale::new("Apia", "Apia, Samoa", -13.8506, -171.7513, "Pacific/Apia"),
    Locale::new("Nuku'alofa", "Nuku'alofa, Tonga", -21.1789, -175.1982, "Pacific/Tongatapu"),
    Locale::new("Port Vila", "Port Vila, Vanuatu", -17.7334, 168.3273, "Pacific/Efate"),
    Locale::new("Almaty", "Almaty, Kazakhstan", 43.2775, 76.8958, "Asia/Almaty"),
    Locale::new("Nur-Sultan", "Nur-Sultan, Kazakhstan", 51.1694, 71.4491, "Asia/Almaty"),
    Locale::new("Tashkent", "Tashkent, Uzbekistan", 41.2995, 69.2401, "Asia/Tashkent"),
    Locale::new("Samarkand", "Samarkand, Uzbekistan", 39.627, 66.975, "Asia/Tashkent"),
    Locale::new("Ashgabat", "Ashgabat, Turkmenistan", 37.9601, 58.3261, "Asia/Ashgabat"),
    Locale::new("Bishkek", "Bishkek, Kyrgyzstan", 42.8746, 74.5698, "Asia/Bishkek"),
    Locale::new("Dushanbe", "Dushanbe, Tajikistan", 38.5598, 68.787, "Asia/Dushanbe"),
    Locale::new("Kabul", "Kabul, Afghanistan", 34.5553, 69.2075, "Asia/Kabul"),
    Locale::new("Anchorage", "Anchorage, Alaska", 61.2181, -149.9003, "America/Anchorage"),
    Locale::new("Fairbanks", "Fairbanks, Alaska", 64.8378, -147.7164, "America/Anchorage"),
    Locale::new("Whitehorse", "Whitehorse, Yukon", 60.7212, -135.0568, "America/Whitehorse"),
    Locale::new("Yellowknife", "Yellowknife, Northwest Territories", 62.454, -114.3718, "America/Yellowknife"),
    Locale::new("Iqaluit", "Iqaluit, Nunavut", 63.7467, -68.517, "America/Iqaluit"),
    Locale::new("Nuuk", "Nuuk, Greenland", 64.1836, -51.7214, "America/Nuuk"),
    Locale::new("Longyearbyen", "Longyearbyen, Svalbard", 78.2232, 15.6267, "Arctic/Longyearbyen"),
    Locale::new("Murmansk", "Murmansk, Russia", 68.9585, 33.0827, "Europe/Moscow"),
    Locale::new("Tromsø", "Tromsø, Norway", 69.6496, 18.956, "Europe/Oslo"),
    Locale::new("Rovaniemi", "Rovaniemi, Finland", 66.5039, 25.7294, "Europe/Helsinki"),
    Locale::new("Male", "Malé, Maldives", 4.1755, 73.5093, "Indian/Maldives"),
    Locale::new("Victoria", "Victoria, Seychelles", -4.6197, 55.45, "Indian/Mahe"),
    Locale::new("Port Louis", "Port Louis, Mauritius", -20.1609, 57.5012, "Indian/Mauritius"),
    Locale::new("Saint Denis", "Saint-Denis, Réunion", -20.8823, 55.4504, "Indian/Reunion"),
    Locale::new("Honolulu", "Honolulu, Hawaii", 21.3099, -157.8581, "Pacific/Honolulu"),
    Locale::new("Guam", "Hagåtña, Guam", 13.4745, 144.7504, "Pacific/Guam"),
];
